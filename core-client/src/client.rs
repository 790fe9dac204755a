//! High-level facade over one shared store
//!
//! Bundles the traversal components with a retry policy and default page
//! size, mirroring how application code consumes this layer: one client per
//! remote connection, cheap per-call component construction underneath.

use std::sync::Arc;

use tracing::instrument;

use store_traits::{
    ListRequest, PermissionEntry, PermissionRole, ResourceKind, ResourceRef, ResourceStore, Result,
    RetryPolicy,
};

use crate::paginator::Paginator;
use crate::path::PathResolver;
use crate::permissions::{self, SharingSummary};
use crate::query::Query;
use crate::retry;
use crate::tree::{ResourceTreeNode, TreeBuilder};

/// Client facade for a hierarchical remote resource store.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use core_client::ResourceClient;
/// use store_traits::RetryPolicy;
///
/// let client = ResourceClient::new(Arc::new(connector))
///     .with_retry_policy(RetryPolicy::default())
///     .with_page_size(200);
///
/// let reports = client.resolve_path("Projects/2024/Reports", None, true).await?;
/// let tree = client.build_tree(&reports, 2).await?;
/// ```
pub struct ResourceClient {
    store: Arc<dyn ResourceStore>,
    policy: RetryPolicy,
    page_size: u32,
}

impl ResourceClient {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self {
            store,
            policy: RetryPolicy::default(),
            page_size: ListRequest::new().page_size,
        }
    }

    /// Replace the retry policy used for every remote call.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the default per-page size hint for listings.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    fn paginator(&self) -> Paginator {
        Paginator::new(self.store.clone(), self.policy.clone())
    }

    /// Collect up to `max_results` resources matching `query` (0 means all),
    /// in server order.
    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn search(&self, query: &Query, max_results: usize) -> Result<Vec<ResourceRef>> {
        let request = ListRequest::new()
            .query(query.as_str())
            .page_size(self.page_size);
        self.paginator().collect(&request, max_results).await
    }

    /// Find non-trashed resources by name, exactly or by substring.
    pub async fn find_by_name(
        &self,
        name: &str,
        exact: bool,
        max_results: usize,
    ) -> Result<Vec<ResourceRef>> {
        let atom = if exact {
            Query::name_equals(name)
        } else {
            Query::name_contains(name)
        };
        self.search(&atom.and(Query::not_trashed()), max_results).await
    }

    /// Find non-trashed folders, optionally filtered by name fragment.
    pub async fn find_folders(
        &self,
        name_contains: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<ResourceRef>> {
        let mut query = Query::kind(ResourceKind::Folder).and(Query::not_trashed());
        if let Some(fragment) = name_contains {
            query = Query::name_contains(fragment).and(query);
        }
        self.search(&query, max_results).await
    }

    /// Resolve (and optionally materialize) a slash-delimited folder path,
    /// returning the deepest folder's id. See [`PathResolver::resolve`].
    pub async fn resolve_path(
        &self,
        path: &str,
        root_id: Option<&str>,
        create_missing: bool,
    ) -> Result<String> {
        PathResolver::new(self.store.clone(), self.policy.clone())
            .resolve(path, root_id, create_missing)
            .await
    }

    /// Expand the containment tree under `root_id` down to `max_depth`. See
    /// [`TreeBuilder::build`].
    pub async fn build_tree(
        &self,
        root_id: &str,
        max_depth: u32,
    ) -> Result<Option<ResourceTreeNode>> {
        TreeBuilder::new(self.store.clone(), self.policy.clone())
            .build(root_id, max_depth)
            .await
    }

    /// Fetch a resource's raw permission entries.
    pub async fn list_permissions(&self, id: &str) -> Result<Vec<PermissionEntry>> {
        retry::invoke(&self.policy, || self.store.list_permissions(id)).await
    }

    /// Fetch and aggregate a resource's permissions into a sharing summary.
    #[instrument(skip(self), fields(id))]
    pub async fn sharing_summary(&self, id: &str) -> Result<SharingSummary> {
        let entries = self.list_permissions(id).await?;
        Ok(permissions::summarize(&entries))
    }

    /// Create a folder under `parent_id` (`None` means the store root).
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> Result<ResourceRef> {
        retry::invoke(&self.policy, || {
            self.store.create(ResourceKind::Folder, name, parent_id)
        })
        .await
    }

    /// Fetch a fresh metadata snapshot for a resource.
    pub async fn get(&self, id: &str) -> Result<ResourceRef> {
        retry::invoke(&self.policy, || self.store.get(id)).await
    }

    /// Rename a resource, returning the refreshed snapshot.
    pub async fn rename(&self, id: &str, name: &str) -> Result<ResourceRef> {
        retry::invoke(&self.policy, || self.store.rename(id, name)).await
    }

    /// Move a resource to the trash (recoverable).
    pub async fn trash(&self, id: &str) -> Result<()> {
        retry::invoke(&self.policy, || self.store.trash(id)).await
    }

    /// Restore a trashed resource.
    pub async fn restore(&self, id: &str) -> Result<()> {
        retry::invoke(&self.policy, || self.store.restore(id)).await
    }

    /// Permanently delete a resource.
    pub async fn delete(&self, id: &str) -> Result<()> {
        retry::invoke(&self.policy, || self.store.delete(id)).await
    }

    /// Grant anyone-with-the-link access at `role`, returning the created
    /// entry (its id is the handle for later revocation).
    pub async fn share_anyone(&self, id: &str, role: PermissionRole) -> Result<PermissionEntry> {
        retry::invoke(&self.policy, || self.store.share_anyone(id, role)).await
    }

    /// Revoke a single permission entry by its id.
    pub async fn revoke_permission(&self, id: &str, permission_id: &str) -> Result<()> {
        retry::invoke(&self.policy, || {
            self.store.revoke_permission(id, permission_id)
        })
        .await
    }
}
