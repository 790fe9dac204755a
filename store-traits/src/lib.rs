//! # Resource Store Traits
//!
//! Shared contract between the resilient client core and remote store
//! providers.
//!
//! ## Overview
//!
//! This crate defines the boundary the client core operates against. A
//! provider crate implements [`ResourceStore`](store::ResourceStore) for a
//! concrete remote API; the core never sees HTTP, only typed operations and
//! the classified errors they can fail with.
//!
//! ## Contents
//!
//! - [`ResourceStore`](store::ResourceStore) - Async transport trait
//!   (list / get / create / rename / trash / restore / delete / permissions)
//! - [`ResourceRef`](types::ResourceRef), [`ListingPage`](types::ListingPage),
//!   [`PermissionEntry`](types::PermissionEntry) - Data model
//! - [`StoreError`](error::StoreError) - Error taxonomy with retryability
//!   classification
//! - [`RetryPolicy`](retry::RetryPolicy) - Backoff configuration passed per
//!   call-site (no process-wide retry state)
//!
//! ## Error Handling
//!
//! Providers must map every failed call onto a [`StoreError`](error::StoreError)
//! variant; the variant alone decides whether the resilient invoker retries.
//! Classification is a declared contract per status code, never inferred from
//! what the operation was doing.
//!
//! ## Thread Safety
//!
//! `ResourceStore` requires `Send + Sync` so components can share a provider
//! behind an `Arc` across concurrent tasks.

pub mod error;
pub mod retry;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use retry::RetryPolicy;
pub use store::ResourceStore;
pub use types::{
    ListRequest, ListingPage, PermissionEntry, PermissionRole, PrincipalType, ResourceKind,
    ResourceRef,
};
