//! Google Drive API response types
//!
//! Data structures for deserializing Google Drive API v3 responses.

use serde::{Deserialize, Serialize};

/// Google Drive API file resource
///
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type
    pub mime_type: String,

    /// Modification time (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,

    /// Parent folder IDs
    #[serde(default)]
    pub parents: Vec<String>,

    /// Whether file is trashed
    #[serde(default)]
    pub trashed: bool,
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// List of files
    #[serde(default)]
    pub files: Vec<DriveFile>,

    /// Token for next page, absent on the last page
    pub next_page_token: Option<String>,

    /// Whether the server skipped some corpora while searching
    #[serde(default)]
    pub incomplete_search: bool,
}

/// Google Drive API permission resource
///
/// See: https://developers.google.com/drive/api/v3/reference/permissions#resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivePermission {
    /// Permission ID
    #[serde(default)]
    pub id: String,

    /// Grantee type (user, group, domain, anyone)
    #[serde(rename = "type")]
    pub grantee_type: String,

    /// Granted role (owner, writer, commenter, reader)
    pub role: String,

    /// Grantee email (user and group types)
    pub email_address: Option<String>,

    /// Grantee domain (domain type)
    pub domain: Option<String>,

    /// Whether the grantee account was deleted
    #[serde(default)]
    pub deleted: bool,
}

/// Google Drive API permissions.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/permissions/list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionListResponse {
    /// List of permissions
    #[serde(default)]
    pub permissions: Vec<DrivePermission>,

    /// Token for next page, absent on the last page
    pub next_page_token: Option<String>,
}
