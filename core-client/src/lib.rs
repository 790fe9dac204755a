//! # Resilient Hierarchical Resource Client
//!
//! Client-side traversal and resilience layer over a remote hierarchical
//! resource store (paginated listing API, folder/file containment tree,
//! discretionary permissions) reached through an unreliable transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`Paginator`](paginator::Paginator) - Cursor-following, bounded-result
//!   collection over the list API
//! - [`Query`](query::Query) - Injection-safe filter expression builder
//! - [`PathResolver`](path::PathResolver) - Idempotent find-or-create
//!   materialization of a slash-delimited folder path
//! - [`TreeBuilder`](tree::TreeBuilder) - Depth-bounded recursive expansion
//!   of the remote containment tree
//! - [`summarize`](permissions::summarize) - Aggregation of raw permission
//!   entries into a normalized sharing summary
//! - [`retry::invoke`] - Exponential backoff with jitter around any single
//!   remote call, driven by error classification
//! - [`ResourceClient`](client::ResourceClient) - Facade wiring the above to
//!   one shared [`ResourceStore`](store_traits::ResourceStore)
//!
//! ## Concurrency
//!
//! Every component issues one in-flight network call at a time and holds no
//! shared mutable state between calls; independent calls are safe to run
//! concurrently over one `Arc<dyn ResourceStore>`. Dropping any returned
//! future cancels the operation immediately, including during a backoff wait.

pub mod client;
pub mod paginator;
pub mod path;
pub mod permissions;
pub mod query;
pub mod retry;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::ResourceClient;
pub use paginator::Paginator;
pub use path::PathResolver;
pub use permissions::{summarize, LinkAccess, SharingSummary};
pub use query::Query;
pub use tree::{ResourceTreeNode, TreeBuilder};

// Re-export the contract crate so callers need only one dependency.
pub use store_traits::{
    ListRequest, ListingPage, PermissionEntry, PermissionRole, PrincipalType, ResourceKind,
    ResourceRef, ResourceStore, Result, RetryPolicy, StoreError,
};
