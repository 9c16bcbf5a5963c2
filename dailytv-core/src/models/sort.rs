//! Selectable sort orders for video listings.

use serde::Serialize;

/// A selectable sort order: stable key, display label, default marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub key: &'static str,
    pub label: &'static str,
    pub is_default: bool,
}

/// Sort orders offered for video listings, in presentation order.
///
/// Relevance only makes sense against a search query, so it is appended
/// last when `is_search` is set.
#[must_use]
pub fn available_video_sorts(is_search: bool) -> Vec<SortOption> {
    let mut sorts = vec![
        SortOption {
            key: "recent",
            label: "Most Recent",
            is_default: true,
        },
        SortOption {
            key: "visited",
            label: "Most Visited",
            is_default: false,
        },
        SortOption {
            key: "commented",
            label: "Most Commented",
            is_default: false,
        },
        SortOption {
            key: "trending",
            label: "Most Trending",
            is_default: false,
        },
    ];

    if is_search {
        sorts.push(SortOption {
            key: "relevance",
            label: "Relevance",
            is_default: false,
        });
    }

    sorts
}
