//! Google Drive API connector implementation
//!
//! Implements the `ResourceStore` trait for Google Drive API v3. Each trait
//! call issues a single request (one per page for permission listing) and
//! classifies failures into the shared error taxonomy; retry scheduling is
//! the caller's concern.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use store_traits::{
    ListRequest, ListingPage, PermissionEntry, PermissionRole, PrincipalType, ResourceKind,
    ResourceRef, ResourceStore, Result, StoreError,
};

use crate::types::{DriveFile, DrivePermission, FilesListResponse, PermissionListResponse};

/// Google Drive API base URL
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Maximum results per page (Google Drive API limit)
const MAX_PAGE_SIZE: u32 = 1000;

/// MIME type marking a resource as a folder
const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Fields to request for file resources
const FILE_FIELDS: &str = "id,name,mimeType,modifiedTime,parents,trashed";

/// Fields to request for permission resources
const PERMISSION_FIELDS: &str = "id,type,role,emailAddress,domain,deleted";

/// Google Drive API connector
///
/// Implements `ResourceStore` for Google Drive API v3.
///
/// # Example
///
/// ```ignore
/// use provider_drive::DriveConnector;
/// use store_traits::{ListRequest, ResourceStore};
///
/// let connector = DriveConnector::new(access_token);
/// let page = connector.list(&ListRequest::new(), None).await?;
/// ```
pub struct DriveConnector {
    /// HTTP client for API requests
    http: reqwest::Client,

    /// OAuth 2.0 access token
    access_token: String,

    /// API base URL, overridable for tests
    base_url: String,
}

impl DriveConnector {
    /// Create a new Drive connector
    ///
    /// # Arguments
    ///
    /// * `access_token` - OAuth 2.0 access token with `drive` scope
    pub fn new(access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            base_url: DRIVE_API_BASE.to_string(),
        }
    }

    /// Point the connector at a different API endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Classify an HTTP error status into the shared error taxonomy.
    fn classify_status(status: u16, message: String) -> StoreError {
        match status {
            429 => StoreError::RateLimited { message },
            500..=599 => StoreError::ServerUnavailable {
                status_code: status,
                message,
            },
            400 => StoreError::BadRequest(message),
            401 | 403 => StoreError::Unauthorized(message),
            404 => StoreError::NotFound(message),
            409 => StoreError::Conflict(message),
            _ => StoreError::Unknown {
                status_code: status,
                message,
            },
        }
    }

    /// Execute a request with auth headers, verifying the response status.
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = builder
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "API request succeeded");
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|e| format!("unreadable error body: {e}"));
        warn!(status = status.as_u16(), "API request failed");
        Err(Self::classify_status(status.as_u16(), message))
    }

    /// Execute a request and deserialize its JSON body.
    async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(builder).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|e| StoreError::Decode(format!("failed to parse API response: {e}")))
    }

    /// Parse RFC 3339 timestamp into UTC
    fn parse_timestamp(rfc3339: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(rfc3339)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Convert a DriveFile into a ResourceRef
    fn convert_file(drive_file: DriveFile) -> ResourceRef {
        let kind = if drive_file.mime_type == FOLDER_MIME_TYPE {
            ResourceKind::Folder
        } else {
            ResourceKind::File
        };

        ResourceRef {
            id: drive_file.id,
            name: drive_file.name,
            kind,
            parent_ids: drive_file.parents,
            modified_at: drive_file
                .modified_time
                .as_deref()
                .and_then(Self::parse_timestamp),
        }
    }

    /// Convert a DrivePermission into a PermissionEntry.
    ///
    /// Returns `None` for unrecognized grantee types or roles; the caller
    /// skips those rather than failing the whole listing.
    fn convert_permission(permission: &DrivePermission) -> Option<PermissionEntry> {
        let principal = match permission.grantee_type.as_str() {
            "user" => PrincipalType::User,
            "group" => PrincipalType::Group,
            "domain" => PrincipalType::Domain,
            "anyone" => PrincipalType::Anyone,
            _ => return None,
        };

        let role = match permission.role.as_str() {
            "owner" => PermissionRole::Owner,
            "writer" | "fileOrganizer" | "organizer" => PermissionRole::Writer,
            "commenter" => PermissionRole::Commenter,
            "reader" => PermissionRole::Reader,
            _ => return None,
        };

        let identifier = match principal {
            PrincipalType::Domain => permission.domain.clone(),
            PrincipalType::Anyone => None,
            PrincipalType::User | PrincipalType::Group => permission.email_address.clone(),
        };

        Some(PermissionEntry {
            id: permission.id.clone(),
            principal,
            role,
            identifier,
        })
    }

    /// Wire name of a grantable role. `Owner` has no grantable wire form.
    fn role_param(role: PermissionRole) -> Option<&'static str> {
        match role {
            PermissionRole::Owner => None,
            PermissionRole::Writer => Some("writer"),
            PermissionRole::Commenter => Some("commenter"),
            PermissionRole::Reader => Some("reader"),
        }
    }
}

#[async_trait]
impl ResourceStore for DriveConnector {
    #[instrument(skip(self, request), fields(query = ?request.query))]
    async fn list(&self, request: &ListRequest, cursor: Option<&str>) -> Result<ListingPage> {
        let page_size = request.page_size.clamp(1, MAX_PAGE_SIZE);
        let mut url = format!(
            "{}/files?pageSize={}&fields=nextPageToken,files({})",
            self.base_url, page_size, FILE_FIELDS
        );

        if let Some(query) = &request.query {
            url.push_str(&format!("&q={}", urlencoding::encode(query)));
        }
        if let Some(order_by) = &request.order_by {
            url.push_str(&format!("&orderBy={}", urlencoding::encode(order_by)));
        }
        if let Some(page_token) = cursor {
            url.push_str(&format!("&pageToken={}", urlencoding::encode(page_token)));
        }

        let list_response: FilesListResponse = self.execute_json(self.http.get(&url)).await?;
        if list_response.incomplete_search {
            warn!("Server reported an incomplete search");
        }

        let items: Vec<ResourceRef> = list_response
            .files
            .into_iter()
            .map(Self::convert_file)
            .collect();
        debug!(count = items.len(), "Listed files");

        Ok(ListingPage {
            items,
            next_cursor: list_response.next_page_token,
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: &str) -> Result<ResourceRef> {
        let url = format!("{}/files/{}?fields={}", self.base_url, id, FILE_FIELDS);
        let drive_file: DriveFile = self.execute_json(self.http.get(&url)).await?;
        Ok(Self::convert_file(drive_file))
    }

    #[instrument(skip(self), fields(name = %name, kind = ?kind))]
    async fn create(
        &self,
        kind: ResourceKind,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<ResourceRef> {
        let url = format!("{}/files?fields={}", self.base_url, FILE_FIELDS);

        let mut body = json!({ "name": name });
        if kind == ResourceKind::Folder {
            body["mimeType"] = json!(FOLDER_MIME_TYPE);
        }
        if let Some(parent) = parent_id {
            body["parents"] = json!([parent]);
        }

        let drive_file: DriveFile = self
            .execute_json(self.http.post(&url).json(&body))
            .await?;
        info!(id = %drive_file.id, "Created resource");
        Ok(Self::convert_file(drive_file))
    }

    #[instrument(skip(self), fields(id = %id, name = %name))]
    async fn rename(&self, id: &str, name: &str) -> Result<ResourceRef> {
        let url = format!("{}/files/{}?fields={}", self.base_url, id, FILE_FIELDS);
        let body = json!({ "name": name });
        let drive_file: DriveFile = self
            .execute_json(self.http.patch(&url).json(&body))
            .await?;
        Ok(Self::convert_file(drive_file))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn trash(&self, id: &str) -> Result<()> {
        let url = format!("{}/files/{}?fields={}", self.base_url, id, FILE_FIELDS);
        let body = json!({ "trashed": true });
        self.execute(self.http.patch(&url).json(&body)).await?;
        info!("Moved resource to trash");
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn restore(&self, id: &str) -> Result<()> {
        let url = format!("{}/files/{}?fields={}", self.base_url, id, FILE_FIELDS);
        let body = json!({ "trashed": false });
        self.execute(self.http.patch(&url).json(&body)).await?;
        info!("Restored resource from trash");
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/files/{}", self.base_url, id);
        self.execute(self.http.delete(&url)).await?;
        info!("Permanently deleted resource");
        Ok(())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn list_permissions(&self, id: &str) -> Result<Vec<PermissionEntry>> {
        let mut entries = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/files/{}/permissions?fields=nextPageToken,permissions({})",
                self.base_url, id, PERMISSION_FIELDS
            );
            if let Some(token) = &page_token {
                url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
            }

            let page: PermissionListResponse = self.execute_json(self.http.get(&url)).await?;
            for permission in &page.permissions {
                if permission.deleted {
                    continue;
                }
                match Self::convert_permission(permission) {
                    Some(entry) => entries.push(entry),
                    None => warn!(
                        grantee_type = %permission.grantee_type,
                        role = %permission.role,
                        "Skipping unrecognized permission"
                    ),
                }
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = entries.len(), "Listed permissions");
        Ok(entries)
    }

    #[instrument(skip(self), fields(id = %id, role = ?role))]
    async fn share_anyone(&self, id: &str, role: PermissionRole) -> Result<PermissionEntry> {
        let role_param = Self::role_param(role).ok_or_else(|| {
            StoreError::BadRequest(format!("role {role:?} cannot be granted to anyone"))
        })?;

        let url = format!(
            "{}/files/{}/permissions?fields={}",
            self.base_url, id, PERMISSION_FIELDS
        );
        let body = json!({ "type": "anyone", "role": role_param });

        let permission: DrivePermission = self
            .execute_json(self.http.post(&url).json(&body))
            .await?;
        info!(permission_id = %permission.id, "Granted public link access");
        Self::convert_permission(&permission).ok_or_else(|| {
            StoreError::Decode(format!(
                "unrecognized permission in response: type '{}', role '{}'",
                permission.grantee_type, permission.role
            ))
        })
    }

    #[instrument(skip(self), fields(id = %id, permission_id = %permission_id))]
    async fn revoke_permission(&self, id: &str, permission_id: &str) -> Result<()> {
        let url = format!(
            "{}/files/{}/permissions/{}",
            self.base_url, id, permission_id
        );
        self.execute(self.http.delete(&url)).await?;
        info!("Revoked permission");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permission(grantee_type: &str, role: &str) -> DrivePermission {
        DrivePermission {
            id: "p1".to_string(),
            grantee_type: grantee_type.to_string(),
            role: role.to_string(),
            email_address: Some("a@x.com".to_string()),
            domain: Some("x.com".to_string()),
            deleted: false,
        }
    }

    #[test]
    fn test_classify_status_retryable_codes() {
        assert!(matches!(
            DriveConnector::classify_status(429, "quota".to_string()),
            StoreError::RateLimited { .. }
        ));
        assert!(matches!(
            DriveConnector::classify_status(503, "down".to_string()),
            StoreError::ServerUnavailable {
                status_code: 503,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_status_terminal_codes() {
        assert!(matches!(
            DriveConnector::classify_status(400, "bad".to_string()),
            StoreError::BadRequest(_)
        ));
        assert!(matches!(
            DriveConnector::classify_status(401, "no".to_string()),
            StoreError::Unauthorized(_)
        ));
        assert!(matches!(
            DriveConnector::classify_status(403, "no".to_string()),
            StoreError::Unauthorized(_)
        ));
        assert!(matches!(
            DriveConnector::classify_status(404, "gone".to_string()),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            DriveConnector::classify_status(409, "dup".to_string()),
            StoreError::Conflict(_)
        ));
        assert!(matches!(
            DriveConnector::classify_status(418, "teapot".to_string()),
            StoreError::Unknown {
                status_code: 418,
                ..
            }
        ));
    }

    #[test]
    fn test_convert_file_maps_folder_mime_type() {
        let drive_file = DriveFile {
            id: "f1".to_string(),
            name: "Reports".to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            modified_time: Some("2024-03-01T12:00:00.000Z".to_string()),
            parents: vec!["root".to_string()],
            trashed: false,
        };

        let resource = DriveConnector::convert_file(drive_file);
        assert_eq!(resource.kind, ResourceKind::Folder);
        assert_eq!(resource.parent_ids, vec!["root"]);
        assert!(resource.modified_at.is_some());
    }

    #[test]
    fn test_convert_file_bad_timestamp_is_none() {
        let drive_file = DriveFile {
            id: "f1".to_string(),
            name: "a.txt".to_string(),
            mime_type: "text/plain".to_string(),
            modified_time: Some("not a timestamp".to_string()),
            parents: vec![],
            trashed: false,
        };

        let resource = DriveConnector::convert_file(drive_file);
        assert_eq!(resource.kind, ResourceKind::File);
        assert_eq!(resource.modified_at, None);
    }

    #[test]
    fn test_convert_permission_picks_identifier_by_principal() {
        let user = DriveConnector::convert_permission(&permission("user", "writer")).unwrap();
        assert_eq!(user.principal, PrincipalType::User);
        assert_eq!(user.role, PermissionRole::Writer);
        assert_eq!(user.identifier.as_deref(), Some("a@x.com"));

        let domain = DriveConnector::convert_permission(&permission("domain", "reader")).unwrap();
        assert_eq!(domain.principal, PrincipalType::Domain);
        assert_eq!(domain.identifier.as_deref(), Some("x.com"));

        let anyone = DriveConnector::convert_permission(&permission("anyone", "reader")).unwrap();
        assert_eq!(anyone.principal, PrincipalType::Anyone);
        assert_eq!(anyone.identifier, None);
    }

    #[test]
    fn test_convert_permission_organizer_roles_are_writers() {
        let entry =
            DriveConnector::convert_permission(&permission("group", "fileOrganizer")).unwrap();
        assert_eq!(entry.role, PermissionRole::Writer);
    }

    #[test]
    fn test_convert_permission_unknown_values_skipped() {
        assert!(DriveConnector::convert_permission(&permission("robot", "reader")).is_none());
        assert!(DriveConnector::convert_permission(&permission("user", "superuser")).is_none());
    }

    #[test]
    fn test_convert_permission_carries_entry_id() {
        let entry = DriveConnector::convert_permission(&permission("user", "reader")).unwrap();
        assert_eq!(entry.id, "p1");
    }

    #[test]
    fn test_role_param_wire_names() {
        assert_eq!(DriveConnector::role_param(PermissionRole::Reader), Some("reader"));
        assert_eq!(
            DriveConnector::role_param(PermissionRole::Commenter),
            Some("commenter")
        );
        assert_eq!(DriveConnector::role_param(PermissionRole::Writer), Some("writer"));
        assert_eq!(DriveConnector::role_param(PermissionRole::Owner), None);
    }

    #[tokio::test]
    async fn test_share_anyone_rejects_owner_before_any_request() {
        let connector = DriveConnector::new("token".to_string());
        let result = connector.share_anyone("f1", PermissionRole::Owner).await;
        assert!(matches!(result, Err(StoreError::BadRequest(_))));
    }
}
