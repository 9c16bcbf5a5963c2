//! Playback metadata assembly from an externally-fetched embed page.

use async_trait::async_trait;

use dailytv_core::models::{
    canonical_video_url, MediaSource, SubtitleTrack, VideoPlaybackData, CANONICAL_PREFIX,
};

use crate::error::Result;

/// Embed-page collaborator seam.
///
/// Fetches the embed page for a video and scrapes individual playback
/// fields out of it. The scraping itself lives outside this crate; each
/// extractor may fail independently and failures are propagated unchanged.
#[async_trait]
pub trait PlaybackSource: Send + Sync {
    async fn video_embed_page(&self, video_id: &str) -> Result<String>;

    fn video_title(&self, html: &str) -> Result<String>;

    fn video_sources(&self, html: &str) -> Result<Vec<MediaSource>>;

    fn video_subtitles(&self, html: &str) -> Result<Vec<SubtitleTrack>>;

    fn video_cover(&self, html: &str) -> Result<String>;
}

/// Assembles [`VideoPlaybackData`] from a [`PlaybackSource`].
pub struct PlaybackResolver<P> {
    source: P,
    prefix: String,
}

impl<P: PlaybackSource> PlaybackResolver<P> {
    pub fn new(source: P) -> Self {
        Self::with_prefix(source, CANONICAL_PREFIX)
    }

    /// Resolver with a custom canonical-URL prefix.
    pub fn with_prefix(source: P, prefix: impl Into<String>) -> Self {
        Self {
            source,
            prefix: prefix.into(),
        }
    }

    /// Fetch the embed page for `video_id` and extract playback metadata.
    ///
    /// Entries resolved here must never trigger filesystem or subtitle
    /// auto-scans downstream, so both suppression flags are always set.
    /// `media_type` and `video_id` are joined verbatim into the canonical
    /// identifier and must not contain `:`.
    pub async fn video_playback_data(
        &self,
        media_type: &str,
        video_id: &str,
    ) -> Result<VideoPlaybackData> {
        let html = self.source.video_embed_page(video_id).await?;

        Ok(VideoPlaybackData {
            title: self.source.video_title(&html)?,
            sources: self.source.video_sources(&html)?,
            subtitles: self.source.video_subtitles(&html)?,
            icon: self.source.video_cover(&html)?,
            no_fs_scan: true,
            no_subtitle_scan: true,
            canonical_url: canonical_video_url(&self.prefix, media_type, video_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DailymotionError;

    /// PlaybackSource stub backed by canned values.
    struct StubSource {
        html: String,
        fail_title: bool,
    }

    impl StubSource {
        fn new() -> Self {
            Self {
                html: "<html>embed</html>".to_string(),
                fail_title: false,
            }
        }
    }

    #[async_trait]
    impl PlaybackSource for StubSource {
        async fn video_embed_page(&self, video_id: &str) -> Result<String> {
            assert_eq!(video_id, "abc123");
            Ok(self.html.clone())
        }

        fn video_title(&self, html: &str) -> Result<String> {
            assert_eq!(html, self.html);
            if self.fail_title {
                return Err(DailymotionError::Extraction("no title".to_string()));
            }
            Ok("A Title".to_string())
        }

        fn video_sources(&self, _html: &str) -> Result<Vec<MediaSource>> {
            Ok(vec![MediaSource {
                url: "https://cdn.example.com/v.m3u8".to_string(),
                format: "m3u8".to_string(),
            }])
        }

        fn video_subtitles(&self, _html: &str) -> Result<Vec<SubtitleTrack>> {
            Ok(vec![SubtitleTrack {
                language: "en".to_string(),
                url: "https://cdn.example.com/v.srt".to_string(),
            }])
        }

        fn video_cover(&self, _html: &str) -> Result<String> {
            Ok("https://cdn.example.com/v.jpg".to_string())
        }
    }

    #[tokio::test]
    async fn test_playback_data_assembly() {
        let resolver = PlaybackResolver::with_prefix(StubSource::new(), "plugin");
        let data = resolver.video_playback_data("movie", "abc123").await.unwrap();

        assert_eq!(data.title, "A Title");
        assert_eq!(data.sources.len(), 1);
        assert_eq!(data.subtitles.len(), 1);
        assert_eq!(data.icon, "https://cdn.example.com/v.jpg");
        assert!(data.no_fs_scan);
        assert!(data.no_subtitle_scan);
        assert_eq!(data.canonical_url, "plugin:video:movie:abc123");
    }

    #[tokio::test]
    async fn test_default_prefix() {
        let resolver = PlaybackResolver::new(StubSource::new());
        let data = resolver.video_playback_data("clip", "abc123").await.unwrap();
        assert_eq!(data.canonical_url, "dailymotion:video:clip:abc123");
    }

    #[tokio::test]
    async fn test_extractor_failure_propagates() {
        let source = StubSource {
            fail_title: true,
            ..StubSource::new()
        };
        let resolver = PlaybackResolver::new(source);

        let err = resolver
            .video_playback_data("movie", "abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, DailymotionError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        struct FailingFetch;

        #[async_trait]
        impl PlaybackSource for FailingFetch {
            async fn video_embed_page(&self, _video_id: &str) -> Result<String> {
                Err(DailymotionError::Network("dns failure".to_string()))
            }

            fn video_title(&self, _html: &str) -> Result<String> {
                unreachable!("embed fetch failed first")
            }

            fn video_sources(&self, _html: &str) -> Result<Vec<MediaSource>> {
                unreachable!("embed fetch failed first")
            }

            fn video_subtitles(&self, _html: &str) -> Result<Vec<SubtitleTrack>> {
                unreachable!("embed fetch failed first")
            }

            fn video_cover(&self, _html: &str) -> Result<String> {
                unreachable!("embed fetch failed first")
            }
        }

        let resolver = PlaybackResolver::new(FailingFetch);
        let err = resolver
            .video_playback_data("movie", "abc123")
            .await
            .unwrap_err();
        assert!(matches!(err, DailymotionError::Network(_)));
    }
}
