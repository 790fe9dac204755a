//! Shared mock and fixture helpers for unit tests.

use async_trait::async_trait;
use mockall::mock;

use store_traits::{
    ListRequest, ListingPage, PermissionEntry, PermissionRole, ResourceKind, ResourceRef,
    ResourceStore, Result, RetryPolicy,
};

// `mockall` cannot generate a trait impl for `ResourceStore` directly: the
// nested references (`Option<&str>`) force a named method lifetime, which then
// fails to match the `async_trait`-desugared trait signature. So the mock
// exposes inherent methods and a hand-written impl below delegates to them.
mock! {
    pub Store {
        pub async fn list<'a>(&self, request: &'a ListRequest, cursor: Option<&'a str>) -> Result<ListingPage>;
        pub async fn get(&self, id: &str) -> Result<ResourceRef>;
        pub async fn create<'a>(
            &self,
            kind: ResourceKind,
            name: &'a str,
            parent_id: Option<&'a str>,
        ) -> Result<ResourceRef>;
        pub async fn rename(&self, id: &str, name: &str) -> Result<ResourceRef>;
        pub async fn trash(&self, id: &str) -> Result<()>;
        pub async fn restore(&self, id: &str) -> Result<()>;
        pub async fn delete(&self, id: &str) -> Result<()>;
        pub async fn list_permissions(&self, id: &str) -> Result<Vec<PermissionEntry>>;
        pub async fn share_anyone(&self, id: &str, role: PermissionRole) -> Result<PermissionEntry>;
        pub async fn revoke_permission(&self, id: &str, permission_id: &str) -> Result<()>;
    }
}

#[async_trait]
impl ResourceStore for MockStore {
    async fn list(&self, request: &ListRequest, cursor: Option<&str>) -> Result<ListingPage> {
        MockStore::list(self, request, cursor).await
    }
    async fn get(&self, id: &str) -> Result<ResourceRef> {
        MockStore::get(self, id).await
    }
    async fn create(
        &self,
        kind: ResourceKind,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<ResourceRef> {
        MockStore::create(self, kind, name, parent_id).await
    }
    async fn rename(&self, id: &str, name: &str) -> Result<ResourceRef> {
        MockStore::rename(self, id, name).await
    }
    async fn trash(&self, id: &str) -> Result<()> {
        MockStore::trash(self, id).await
    }
    async fn restore(&self, id: &str) -> Result<()> {
        MockStore::restore(self, id).await
    }
    async fn delete(&self, id: &str) -> Result<()> {
        MockStore::delete(self, id).await
    }
    async fn list_permissions(&self, id: &str) -> Result<Vec<PermissionEntry>> {
        MockStore::list_permissions(self, id).await
    }
    async fn share_anyone(&self, id: &str, role: PermissionRole) -> Result<PermissionEntry> {
        MockStore::share_anyone(self, id, role).await
    }
    async fn revoke_permission(&self, id: &str, permission_id: &str) -> Result<()> {
        MockStore::revoke_permission(self, id, permission_id).await
    }
}

/// Policy with negligible delays so retry paths don't slow the suite down.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay: std::time::Duration::from_millis(1),
        max_delay: std::time::Duration::from_millis(2),
    }
}

pub fn file(id: &str, name: &str, parent: &str) -> ResourceRef {
    ResourceRef {
        id: id.to_string(),
        name: name.to_string(),
        kind: ResourceKind::File,
        parent_ids: vec![parent.to_string()],
        modified_at: None,
    }
}

pub fn folder(id: &str, name: &str, parent: &str) -> ResourceRef {
    ResourceRef {
        id: id.to_string(),
        name: name.to_string(),
        kind: ResourceKind::Folder,
        parent_ids: vec![parent.to_string()],
        modified_at: None,
    }
}
