//! Dailymotion adapter: typed queries, pagination driver, playback
//! metadata assembly.

pub mod api;
pub mod fields;
pub mod model;
pub mod playback;

pub use api::{ApiCaller, ApiResponse};
pub use model::{DailymotionModel, QueryResult};
pub use playback::{PlaybackResolver, PlaybackSource};
