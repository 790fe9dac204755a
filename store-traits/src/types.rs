//! Data model shared by the client core and providers
//!
//! These types are provider-neutral snapshots of remote state. A
//! [`ResourceRef`] is never mutated in place; callers re-fetch and replace
//! wholesale to avoid stale-field bugs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    File,
    Folder,
}

/// Snapshot of a remote resource's metadata.
///
/// Identity is `id`; `name` is not unique within a parent. A resource may
/// carry multiple parents (multi-parenting is legal in the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// Opaque resource identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// File or folder
    pub kind: ResourceKind,
    /// IDs of containing folders (may be empty for roots or orphans)
    pub parent_ids: Vec<String>,
    /// Last modification time, if the store reported one
    pub modified_at: Option<DateTime<Utc>>,
}

impl ResourceRef {
    /// Whether this resource can contain children.
    pub fn is_folder(&self) -> bool {
        self.kind == ResourceKind::Folder
    }
}

/// One page of listing results.
///
/// The absence of `next_cursor` is the authoritative end-of-results signal.
/// An empty `items` with a present cursor does NOT mean end-of-results; the
/// caller must keep paging.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Items in server order
    pub items: Vec<ResourceRef>,
    /// Opaque continuation token for the next page
    pub next_cursor: Option<String>,
}

/// Request template for listing resources.
///
/// The paginator clones the template per page and adjusts `page_size` to the
/// remaining need; providers treat `page_size` as a hint and may clamp it to
/// their own limit.
///
/// # Example
///
/// ```ignore
/// use store_traits::ListRequest;
///
/// let request = ListRequest::new()
///     .query("trashed = false")
///     .order_by("modifiedTime desc")
///     .page_size(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    /// Filter expression in the store's query language, if any
    pub query: Option<String>,
    /// Server-side ordering clause, if any
    pub order_by: Option<String>,
    /// Per-page size hint
    pub page_size: u32,
}

/// Default per-page size hint
const DEFAULT_PAGE_SIZE: u32 = 100;

impl ListRequest {
    pub fn new() -> Self {
        Self {
            query: None,
            order_by: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// The entity a permission entry grants access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalType {
    User,
    Group,
    Domain,
    Anyone,
}

/// Access level a permission entry grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionRole {
    Owner,
    Writer,
    Commenter,
    Reader,
}

/// A raw access-control entry as received from the store.
///
/// `identifier` is an email address for users and groups, a domain name for
/// domain grants, and absent for `Anyone`. Never assume presence; the vendor
/// omits fields freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    /// Store-assigned entry id, the handle for revocation
    pub id: String,
    pub principal: PrincipalType,
    pub role: PermissionRole,
    pub identifier: Option<String>,
}
