//! Pagination support for adapter queries.
//!
//! Continuations are explicit cursor values rather than captured closures,
//! so they can be inspected, serialized, and re-dispatched by a driver.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::{Filters, QueryConfig, QueryKind};

/// Everything needed to re-issue a paged query for its next page.
///
/// The cursor snapshots the filters and config that were actually
/// dispatched, so a paged sequence cannot be redirected to a different
/// filter set midway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCursor {
    pub kind: QueryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    pub filters: Filters,
    pub config: QueryConfig,
    /// Page to request next (1-indexed).
    pub next_page: u64,
}

/// Pagination descriptor attached to every successful query result.
///
/// Invariant: `next` is `Some` exactly when `has_next` is true. Build
/// values through [`PageInfo::end`] and [`PageInfo::with_cursor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageCursor>,
}

impl PageInfo {
    /// Descriptor for the final page.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            has_next: false,
            next: None,
        }
    }

    /// Descriptor for a page with more results after it.
    #[must_use]
    pub fn with_cursor(cursor: PageCursor) -> Self {
        Self {
            has_next: true,
            next: Some(cursor),
        }
    }
}

/// JSON truthiness, as loosely-typed backends apply it to flag fields:
/// `false`, `0`, `""`, and `null` are false, everything else is true.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether a paged payload reports more results after it.
#[must_use]
pub fn has_more(json: &Value) -> bool {
    json.get("has_more").is_some_and(is_truthy)
}

/// Page number reported by a paged payload, defaulting to 1 when the field
/// is missing or not a number.
#[must_use]
pub fn reported_page(json: &Value) -> u64 {
    json.get("page").and_then(Value::as_u64).unwrap_or(1)
}
