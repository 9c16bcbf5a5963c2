// DailyTV Provider Adapters
//
// This crate contains the Dailymotion adapter layer: typed domain queries
// (channels, users, videos) dispatched through an external transport seam,
// explicit pagination cursors, and playback metadata assembly.
//
// Architecture:
// - dailytv-core: domain models (pagination, query vocabulary, sorts,
//   playback data) and logging setup
// - dailytv-providers: the adapter itself behind the ApiCaller and
//   PlaybackSource trait seams; transports and scrapers are host-provided

// Shared error types
pub mod error;

// Adapter (no transport dependency)
pub mod dailymotion;

// Re-export adapter types for convenience
pub use dailymotion::{
    ApiCaller, ApiResponse, DailymotionModel, PlaybackResolver, PlaybackSource, QueryResult,
};
pub use error::DailymotionError;
