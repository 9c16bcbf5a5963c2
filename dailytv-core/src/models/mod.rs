pub mod pagination;
pub mod playback;
pub mod query;
pub mod sort;

pub use pagination::{has_more, is_truthy, reported_page, PageCursor, PageInfo};
pub use playback::{
    canonical_video_url, MediaSource, SubtitleTrack, VideoPlaybackData, CANONICAL_PREFIX,
};
pub use query::{Filters, QueryConfig, QueryKind};
pub use sort::{available_video_sorts, SortOption};
