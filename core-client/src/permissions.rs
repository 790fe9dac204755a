//! Aggregation of raw permission entries into a sharing summary
//!
//! Pure, no network dependency. The summary is recomputed fresh from the
//! entry list on every call, never incrementally updated, so it cannot
//! drift from the source of truth.

use std::collections::BTreeSet;

use store_traits::{PermissionEntry, PermissionRole, PrincipalType};

/// Access level exposed by a public link or a domain grant.
///
/// The derived ordering is the precedence lattice: `Viewer < Commenter <
/// Editor`. A resource can only expose its most permissive public state, so
/// the aggregated link role only ever moves up this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkAccess {
    Viewer,
    Commenter,
    Editor,
}

/// Normalized view of who can do what on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharingSummary {
    /// Owning account, if any entry carried the Owner role (last one wins)
    pub owner: Option<String>,
    /// Users and groups with write access
    pub editors: BTreeSet<String>,
    /// Principals with comment access
    pub commenters: BTreeSet<String>,
    /// Users and groups with read access
    pub viewers: BTreeSet<String>,
    /// Anyone-with-the-link access level, `None` when not publicly shared
    pub public_link: Option<LinkAccess>,
    /// Whole-domain grants as (domain, access) pairs
    pub domain_grants: BTreeSet<(String, LinkAccess)>,
}

/// Classify each raw entry by role and principal type into a summary.
///
/// Single pass; deterministic for a given input sequence. The store should
/// never return more than one Owner entry, but if it does the last one wins
/// rather than crashing. Entries missing an identifier where one is needed
/// are skipped.
pub fn summarize(entries: &[PermissionEntry]) -> SharingSummary {
    let mut summary = SharingSummary::default();

    for entry in entries {
        match entry.role {
            PermissionRole::Owner => {
                summary.owner = entry.identifier.clone();
            }
            PermissionRole::Writer => match entry.principal {
                PrincipalType::Anyone => raise_link(&mut summary, LinkAccess::Editor),
                PrincipalType::Domain => {
                    if let Some(domain) = &entry.identifier {
                        summary.domain_grants.insert((domain.clone(), LinkAccess::Editor));
                    }
                }
                PrincipalType::User | PrincipalType::Group => {
                    if let Some(identifier) = &entry.identifier {
                        summary.editors.insert(identifier.clone());
                    }
                }
            },
            PermissionRole::Commenter => {
                if let Some(identifier) = &entry.identifier {
                    summary.commenters.insert(identifier.clone());
                }
                if entry.principal == PrincipalType::Anyone {
                    raise_link(&mut summary, LinkAccess::Commenter);
                }
            }
            PermissionRole::Reader => match entry.principal {
                PrincipalType::Anyone => raise_link(&mut summary, LinkAccess::Viewer),
                PrincipalType::Domain => {
                    if let Some(domain) = &entry.identifier {
                        summary.domain_grants.insert((domain.clone(), LinkAccess::Viewer));
                    }
                }
                PrincipalType::User | PrincipalType::Group => {
                    if let Some(identifier) = &entry.identifier {
                        summary.viewers.insert(identifier.clone());
                    }
                }
            },
        }
    }

    summary
}

/// Raise the public link level, never lowering an already more permissive
/// state.
fn raise_link(summary: &mut SharingSummary, level: LinkAccess) {
    summary.public_link = summary.public_link.max(Some(level));
}
