//! Filter expression builder for the store's query language
//!
//! Literal values are always escaped before they reach an expression; a
//! resource named `O'Brien` must not be able to alter query semantics.
//! Composition is left-to-right with no operator-precedence inference;
//! callers group explicitly via [`Query::group`].

use chrono::{DateTime, SecondsFormat, Utc};

use store_traits::ResourceKind;

/// MIME type the store uses to mark folders
const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// A composable boolean filter expression.
///
/// # Example
///
/// ```ignore
/// use core_client::Query;
/// use store_traits::ResourceKind;
///
/// let filter = Query::name_equals("Q1 Report")
///     .and(Query::kind(ResourceKind::Folder))
///     .and(Query::not_trashed())
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    expr: String,
}

impl Query {
    /// Exact name match.
    pub fn name_equals(name: &str) -> Self {
        Self {
            expr: format!("name = '{}'", escape_literal(name)),
        }
    }

    /// Substring name match.
    pub fn name_contains(fragment: &str) -> Self {
        Self {
            expr: format!("name contains '{}'", escape_literal(fragment)),
        }
    }

    /// Match resources of the given kind.
    pub fn kind(kind: ResourceKind) -> Self {
        let op = match kind {
            ResourceKind::Folder => "=",
            ResourceKind::File => "!=",
        };
        Self {
            expr: format!("mimeType {} '{}'", op, FOLDER_MIME_TYPE),
        }
    }

    /// Match direct children of the given folder.
    pub fn parent(parent_id: &str) -> Self {
        Self {
            expr: format!("'{}' in parents", escape_literal(parent_id)),
        }
    }

    /// Match resources modified strictly after the given instant.
    pub fn modified_after(instant: DateTime<Utc>) -> Self {
        Self {
            expr: format!(
                "modifiedTime > '{}'",
                instant.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        }
    }

    /// Match resources owned by the given account.
    pub fn owned_by(email: &str) -> Self {
        Self {
            expr: format!("'{}' in owners", escape_literal(email)),
        }
    }

    /// Exclude trashed resources.
    pub fn not_trashed() -> Self {
        Self {
            expr: "trashed = false".to_string(),
        }
    }

    /// Conjunction, left-to-right.
    pub fn and(self, other: Query) -> Self {
        Self {
            expr: format!("{} and {}", self.expr, other.expr),
        }
    }

    /// Disjunction, left-to-right.
    pub fn or(self, other: Query) -> Self {
        Self {
            expr: format!("{} or {}", self.expr, other.expr),
        }
    }

    /// Negation. The operand is grouped so negation binds to the whole
    /// expression built so far.
    pub fn not_(self) -> Self {
        Self {
            expr: format!("not ({})", self.expr),
        }
    }

    /// Explicit grouping. No precedence is inferred for `and`/`or` chains;
    /// use this wherever mixing them.
    pub fn group(self) -> Self {
        Self {
            expr: format!("({})", self.expr),
        }
    }

    /// Render the final filter string.
    pub fn build(self) -> String {
        self.expr
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expr)
    }
}

/// Escape a literal for embedding between single quotes: backslashes first,
/// then quotes, so user-supplied strings stay data.
fn escape_literal(literal: &str) -> String {
    literal.replace('\\', "\\\\").replace('\'', "\\'")
}
