//! Core domain models for the DailyTV adapter layer.
//!
//! Pagination descriptors, the query vocabulary, sort options, playback
//! metadata, and logging setup shared by the provider crates.

pub mod logging;
pub mod models;

pub use models::{
    available_video_sorts, canonical_video_url, Filters, MediaSource, PageCursor, PageInfo,
    QueryConfig, QueryKind, SortOption, SubtitleTrack, VideoPlaybackData, CANONICAL_PREFIX,
};
