//! Query vocabulary: the logical query kinds, opaque filters, and the
//! per-call configuration value.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The four logical queries the adapter can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Channels,
    ChannelTopUsers,
    ChannelVideos,
    SearchVideos,
}

impl QueryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Channels => "channels",
            Self::ChannelTopUsers => "channel_top_users",
            Self::ChannelVideos => "channel_videos",
            Self::SearchVideos => "search_videos",
        }
    }

    /// Whether the query embeds a channel id in its endpoint path.
    #[must_use]
    pub const fn is_channel_scoped(self) -> bool {
        matches!(self, Self::ChannelTopUsers | Self::ChannelVideos)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied query criteria.
///
/// Opaque to the adapter: entries are forwarded to the transport unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(Map<String, Value>);

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl FromIterator<(String, Value)> for Filters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-call query configuration.
///
/// An immutable value type: policy adjustments (page advancement, forced
/// cache bypass) are expressed by deriving a new value with the `with_*`
/// builders, never by mutating a caller's instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Ask the transport to bypass its response cache.
    #[serde(default)]
    pub disable_cache: bool,

    /// Page to request (1-indexed); the transport's default when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    /// Items per page; the transport's default when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl QueryConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disable_cache: false,
            page: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_cache_disabled(mut self) -> Self {
        self.disable_cache = true;
        self
    }
}
