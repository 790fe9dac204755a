//! Depth-bounded recursive expansion of the remote containment tree
//!
//! Produces an in-memory tree mirroring the remote parent/child graph, one
//! listing at a time. Traversal cost is bounded by `max_depth`; a node at
//! the frontier is kept but its children are never enumerated.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, instrument};

use store_traits::{
    ListRequest, ResourceKind, ResourceRef, ResourceStore, Result, RetryPolicy, StoreError,
};

use crate::paginator::Paginator;
use crate::query::Query;
use crate::retry;

/// One node of an expanded containment tree.
///
/// Owned exclusively by the `build` call that produced it; never shared or
/// cached across calls. A child's depth is always its parent's depth + 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTreeNode {
    pub resource: ResourceRef,
    pub depth: u32,
    pub children: Vec<ResourceTreeNode>,
}

/// Recursively expands folders via the paginated list API.
pub struct TreeBuilder {
    store: Arc<dyn ResourceStore>,
    policy: RetryPolicy,
    paginator: Paginator,
}

impl TreeBuilder {
    pub fn new(store: Arc<dyn ResourceStore>, policy: RetryPolicy) -> Self {
        let paginator = Paginator::new(store.clone(), policy.clone());
        Self {
            store,
            policy,
            paginator,
        }
    }

    /// Expand the tree rooted at `root_id` down to `max_depth`.
    ///
    /// The root sits at depth 0. Folder children recurse one level deeper;
    /// file children become leaves with no expansion. A folder at exactly
    /// `max_depth` is included with empty children rather than omitted, so
    /// the result never contains a node deeper than `max_depth`. Children
    /// appear in server listing order.
    ///
    /// Any fetch failure aborts the whole call with
    /// [`StoreError::TraversalAborted`] wrapping the cause; no partial tree
    /// is ever returned.
    #[instrument(skip(self), fields(root_id, max_depth))]
    pub async fn build(&self, root_id: &str, max_depth: u32) -> Result<Option<ResourceTreeNode>> {
        let result = async {
            let root = retry::invoke(&self.policy, || self.store.get(root_id)).await?;
            self.expand(root, 0, max_depth).await
        }
        .await;

        result.map_err(|source| StoreError::TraversalAborted {
            source: Box::new(source),
        })
    }

    /// Expand `resource` at `depth`, returning `None` when the depth bound
    /// is exceeded (the caller omits the subtree).
    fn expand(
        &self,
        resource: ResourceRef,
        depth: u32,
        max_depth: u32,
    ) -> BoxFuture<'_, Result<Option<ResourceTreeNode>>> {
        async move {
            if depth > max_depth {
                return Ok(None);
            }

            let mut node = ResourceTreeNode {
                resource,
                depth,
                children: Vec::new(),
            };

            // Frontier node: keep it, but stop expanding here.
            if depth == max_depth || node.resource.kind == ResourceKind::File {
                return Ok(Some(node));
            }

            let query = Query::parent(&node.resource.id).and(Query::not_trashed());
            let request = ListRequest::new().query(query.build());
            let children = self.paginator.collect(&request, 0).await?;
            debug!(
                id = %node.resource.id,
                depth,
                children = children.len(),
                "Expanding folder"
            );

            for child in children {
                match child.kind {
                    ResourceKind::Folder => {
                        if let Some(subtree) = self.expand(child, depth + 1, max_depth).await? {
                            node.children.push(subtree);
                        }
                    }
                    ResourceKind::File => {
                        node.children.push(ResourceTreeNode {
                            resource: child,
                            depth: depth + 1,
                            children: Vec::new(),
                        });
                    }
                }
            }

            Ok(Some(node))
        }
        .boxed()
    }
}
