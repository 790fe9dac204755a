//! Remote store transport abstraction
//!
//! The single trait the client core calls through. Providers translate these
//! operations into their wire protocol and classify every failure onto a
//! [`StoreError`](crate::error::StoreError) variant.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ListRequest, ListingPage, PermissionEntry, PermissionRole, ResourceKind, ResourceRef,
};

/// Async transport trait for a hierarchical remote resource store.
///
/// Implementations must be stateless per call (no shared mutable state
/// between operations) so independent client calls can run concurrently over
/// one shared instance. None of these methods retry; resilience is layered
/// on top by the client core.
///
/// # Example
///
/// ```ignore
/// use store_traits::{ListRequest, ResourceStore};
///
/// async fn first_page(store: &dyn ResourceStore) -> store_traits::Result<usize> {
///     let request = ListRequest::new().query("trashed = false");
///     let page = store.list(&request, None).await?;
///     Ok(page.items.len())
/// }
/// ```
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetch one page of resources matching `request`, starting at `cursor`.
    ///
    /// A `None` cursor requests the first page. The returned page's cursor
    /// being `None` is the end-of-results signal.
    async fn list(&self, request: &ListRequest, cursor: Option<&str>) -> Result<ListingPage>;

    /// Fetch metadata for a single resource by id.
    async fn get(&self, id: &str) -> Result<ResourceRef>;

    /// Create a resource under `parent_id` (`None` means the store root).
    async fn create(
        &self,
        kind: ResourceKind,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<ResourceRef>;

    /// Rename a resource, returning the refreshed snapshot.
    async fn rename(&self, id: &str, name: &str) -> Result<ResourceRef>;

    /// Move a resource to the store's trash (recoverable).
    async fn trash(&self, id: &str) -> Result<()>;

    /// Restore a trashed resource.
    async fn restore(&self, id: &str) -> Result<()>;

    /// Permanently delete a resource.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Fetch the raw access-control entries for a resource.
    async fn list_permissions(&self, id: &str) -> Result<Vec<PermissionEntry>>;

    /// Grant anyone-with-the-link access at `role`, returning the created
    /// entry. `Owner` is not grantable this way and fails with `BadRequest`.
    async fn share_anyone(&self, id: &str, role: PermissionRole) -> Result<PermissionEntry>;

    /// Revoke a single access-control entry by its id.
    async fn revoke_permission(&self, id: &str, permission_id: &str) -> Result<()>;
}
