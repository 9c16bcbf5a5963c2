//! Dailymotion query adapter.
//!
//! Translates typed domain queries into REST calls through the
//! [`ApiCaller`] seam and reshapes raw responses into results carrying an
//! explicit pagination cursor.

use serde_json::Value;
use tracing::debug;

use dailytv_core::models::{
    has_more, reported_page, Filters, PageCursor, PageInfo, QueryConfig, QueryKind,
};

use super::api::{ApiCaller, ApiResponse};
use super::fields::fields_for;
use crate::error::{DailymotionError, Result};

/// Successful query result: the raw JSON payload, unchanged, plus the
/// pagination descriptor derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub json: Value,
    pub pagination: PageInfo,
}

/// Query adapter over an [`ApiCaller`] transport.
///
/// Stateless: every call owns its arguments and derives fresh values, so a
/// single model can serve any number of concurrent queries.
pub struct DailymotionModel<A> {
    api: A,
}

impl<A: ApiCaller> DailymotionModel<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying transport.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// List channels.
    pub async fn channels(&self, filters: &Filters, config: &QueryConfig) -> Result<QueryResult> {
        self.run(QueryKind::Channels, None, filters, *config).await
    }

    /// List the top users of a channel.
    ///
    /// Always dispatched with the cache bypassed, whatever the caller's
    /// config says; the caller's value is not consulted or modified.
    pub async fn channel_top_users(
        &self,
        channel_id: &str,
        filters: &Filters,
        config: &QueryConfig,
    ) -> Result<QueryResult> {
        self.run(QueryKind::ChannelTopUsers, Some(channel_id), filters, *config)
            .await
    }

    /// List the videos of a channel.
    pub async fn channel_videos(
        &self,
        channel_id: &str,
        filters: &Filters,
        config: &QueryConfig,
    ) -> Result<QueryResult> {
        self.run(QueryKind::ChannelVideos, Some(channel_id), filters, *config)
            .await
    }

    /// Search videos.
    pub async fn search_videos(
        &self,
        filters: &Filters,
        config: &QueryConfig,
    ) -> Result<QueryResult> {
        self.run(QueryKind::SearchVideos, None, filters, *config)
            .await
    }

    /// Fetch the page a cursor points at.
    ///
    /// Re-issues the captured query with the page advanced; filters and
    /// config are the ones snapshotted when the cursor was built.
    pub async fn next_page(&self, cursor: &PageCursor) -> Result<QueryResult> {
        let config = cursor.config.with_page(cursor.next_page);
        self.run(
            cursor.kind,
            cursor.channel_id.as_deref(),
            &cursor.filters,
            config,
        )
        .await
    }

    async fn run(
        &self,
        kind: QueryKind,
        channel_id: Option<&str>,
        filters: &Filters,
        config: QueryConfig,
    ) -> Result<QueryResult> {
        // Top-user listings are never served from cache.
        let config = if kind == QueryKind::ChannelTopUsers {
            config.with_cache_disabled()
        } else {
            config
        };

        let path = endpoint_path(kind, channel_id)?;
        debug!(kind = %kind, path = %path, page = ?config.page, "dispatching query");

        let ApiResponse { json } = self
            .api
            .call(&path, fields_for(kind), filters, &config)
            .await?;

        let pagination = build_page_info(kind, channel_id, filters, &config, &json);
        Ok(QueryResult { json, pagination })
    }
}

/// REST endpoint for a query kind, embedding the channel id where the path
/// requires one.
fn endpoint_path(kind: QueryKind, channel_id: Option<&str>) -> Result<String> {
    match kind {
        QueryKind::Channels => Ok("/channels".to_string()),
        QueryKind::SearchVideos => Ok("/videos".to_string()),
        QueryKind::ChannelTopUsers | QueryKind::ChannelVideos => {
            let id = channel_id.ok_or_else(|| {
                DailymotionError::InvalidCursor(format!("{kind} query is missing its channel id"))
            })?;
            let segment = if kind == QueryKind::ChannelTopUsers {
                "users"
            } else {
                "videos"
            };
            Ok(format!("/channel/{id}/{segment}"))
        }
    }
}

/// Pagination descriptor for a payload.
///
/// The cursor snapshots the filters and the config actually dispatched
/// (including any forced cache bypass), so every later page repeats the
/// same logical query.
fn build_page_info(
    kind: QueryKind,
    channel_id: Option<&str>,
    filters: &Filters,
    config: &QueryConfig,
    json: &Value,
) -> PageInfo {
    if !has_more(json) {
        return PageInfo::end();
    }

    PageInfo::with_cursor(PageCursor {
        kind,
        channel_id: channel_id.map(str::to_string),
        filters: filters.clone(),
        config: *config,
        next_page: reported_page(json) + 1,
    })
}
