//! Playback metadata extracted from a video embed page.

use serde::{Deserialize, Serialize};

/// Default route prefix for canonical video identifiers.
pub const CANONICAL_PREFIX: &str = "dailymotion";

/// A playable media source scraped from the embed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    pub url: String,
    /// Container/stream format (e.g. "mp4", "m3u8").
    pub format: String,
}

/// A subtitle track scraped from the embed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Language code (e.g. "en", "fr").
    pub language: String,
    pub url: String,
}

/// Everything a player needs to start playback of one video.
///
/// Constructed once per playback request and handed to the caller; this
/// layer never retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPlaybackData {
    pub title: String,
    pub sources: Vec<MediaSource>,
    pub subtitles: Vec<SubtitleTrack>,
    /// Thumbnail/cover URL.
    pub icon: String,
    /// Playback-resolved entries must never trigger a filesystem scan.
    pub no_fs_scan: bool,
    /// Playback-resolved entries must never trigger a subtitle auto-scan.
    pub no_subtitle_scan: bool,
    /// Stable internal identifier, not a fetchable URL.
    pub canonical_url: String,
}

/// Canonical identifier for a video: `{prefix}:video:{media_type}:{id}`.
///
/// The segments are joined verbatim with no escaping, so `media_type` and
/// `video_id` must not contain `:`.
#[must_use]
pub fn canonical_video_url(prefix: &str, media_type: &str, video_id: &str) -> String {
    format!("{prefix}:video:{media_type}:{video_id}")
}
