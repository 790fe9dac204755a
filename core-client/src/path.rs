//! Idempotent find-or-create materialization of a folder path
//!
//! Walks a slash-delimited path one segment at a time, checking for an
//! existing folder before ever creating one. Repeating a `create_missing`
//! resolve over an already-materialized path creates nothing new.

use std::sync::Arc;

use tracing::{debug, instrument};

use store_traits::{ListRequest, ResourceKind, ResourceStore, Result, RetryPolicy, StoreError};

use crate::paginator::Paginator;
use crate::query::Query;
use crate::retry;

/// Resolves slash-delimited folder paths against the remote tree.
pub struct PathResolver {
    store: Arc<dyn ResourceStore>,
    policy: RetryPolicy,
    paginator: Paginator,
}

/// Split a path on `/`, discarding empty segments from leading, trailing, or
/// doubled separators.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl PathResolver {
    pub fn new(store: Arc<dyn ResourceStore>, policy: RetryPolicy) -> Self {
        let paginator = Paginator::new(store.clone(), policy.clone());
        Self {
            store,
            policy,
            paginator,
        }
    }

    /// Resolve `path` under `root_id` (`None` means the store root) and
    /// return the id of the deepest segment's folder.
    ///
    /// Each segment is looked up before any creation, so repeating the call
    /// never duplicates folders. When several folders share the segment name
    /// the first match in server order wins; duplicate names are legal in
    /// the store and this non-determinism is deliberate. A missing segment
    /// fails with `NotFound` unless `create_missing` is set.
    ///
    /// Either the full path resolves (or is created), or the call fails;
    /// already-created intermediate folders are not cleaned up on a later
    /// failure. Two concurrent resolvers may race-create the same missing
    /// segment; the store offers no compare-and-create primitive to prevent
    /// it.
    #[instrument(skip(self), fields(path, root_id, create_missing))]
    pub async fn resolve(
        &self,
        path: &str,
        root_id: Option<&str>,
        create_missing: bool,
    ) -> Result<String> {
        let mut current: Option<String> = root_id.map(str::to_string);

        for segment in split_segments(path) {
            let id = self.resolve_segment(segment, current.as_deref(), create_missing).await?;
            current = Some(id);
        }

        current.ok_or_else(|| {
            StoreError::BadRequest(format!(
                "path '{}' has no folder segments and no root was given",
                path
            ))
        })
    }

    /// Find the folder named `segment` under `parent` (first match in server
    /// order), creating it when allowed.
    async fn resolve_segment(
        &self,
        segment: &str,
        parent: Option<&str>,
        create_missing: bool,
    ) -> Result<String> {
        let mut query = Query::name_equals(segment)
            .and(Query::kind(ResourceKind::Folder))
            .and(Query::not_trashed());
        if let Some(parent_id) = parent {
            query = query.and(Query::parent(parent_id));
        }

        let request = ListRequest::new().query(query.build()).page_size(1);
        let found = self.paginator.collect(&request, 1).await?;

        if let Some(existing) = found.into_iter().next() {
            debug!(segment, id = %existing.id, "Segment already exists");
            return Ok(existing.id);
        }

        if !create_missing {
            return Err(StoreError::NotFound(format!(
                "folder '{}' under '{}'",
                segment,
                parent.unwrap_or("root")
            )));
        }

        let created = retry::invoke(&self.policy, || {
            self.store.create(ResourceKind::Folder, segment, parent)
        })
        .await?;
        debug!(segment, id = %created.id, "Created missing segment");
        Ok(created.id)
    }
}
