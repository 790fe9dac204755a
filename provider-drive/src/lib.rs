//! # Google Drive Provider
//!
//! Implements the `ResourceStore` trait for Google Drive API v3.
//!
//! ## Overview
//!
//! This crate provides:
//! - Paginated file listing with server-side query filtering
//! - Folder creation, rename, trash, and permanent deletion
//! - Permission listing normalized into principal/role entries
//! - HTTP status classification into the shared error taxonomy
//!
//! The connector performs exactly one HTTP request per trait call (one per
//! page for permission listing); retry scheduling belongs to the caller.

pub mod connector;
pub mod types;

pub use connector::DriveConnector;
