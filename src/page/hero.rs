use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::FieldNormalizer;
use crate::record::RawContent;
use crate::state::ContentState;

/// Home-page hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub video_url: String,
    /// Shown while the video loads or when it cannot play.
    pub fallback_image: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Welcome to NextGen".to_string(),
            subtitle: "Innovative Solutions for Tomorrow".to_string(),
            video_url: "/asset/videos/banner.mp4".to_string(),
            fallback_image: "/asset/image/bg.png".to_string(),
        }
    }
}

const WANTED: &[&str] = &[
    "title",
    "hero_title",
    "sub_title",
    "hero_subtitle",
    "background_video",
];

pub async fn load(client: &CmsClient) -> ContentState<HeroContent> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [FetchStrategy::PageBySlug("home".to_string())];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(HeroContent::default(), "Home page not found");
        }
    };

    let normalizer = FieldNormalizer::new(client);
    let defaults = HeroContent::default();

    // Custom field first, the page's own rendered title next, constant last.
    let title_default = raw.title.clone().unwrap_or(defaults.title);
    let title = FieldNormalizer::text(
        raw.field("title").or_else(|| raw.field("hero_title")),
        &title_default,
    );
    let subtitle = FieldNormalizer::text(
        raw.field("sub_title").or_else(|| raw.field("hero_subtitle")),
        &defaults.subtitle,
    );
    let video_url = video_url(&raw, &normalizer).unwrap_or(defaults.video_url);

    ContentState::ready(HeroContent {
        title,
        subtitle,
        video_url,
        fallback_image: defaults.fallback_image,
    })
}

/// Background video: the `background_video` field as a URL string or media
/// object, else an embedded featured video.
fn video_url(raw: &RawContent, normalizer: &FieldNormalizer<'_>) -> Option<String> {
    if let Some(value) = raw.field("background_video") {
        if let Some(s) = value.as_str() {
            if !s.is_empty() {
                return Some(normalizer.absolutize(s));
            }
        }
        if let Some(s) = value.get("url").and_then(Value::as_str) {
            if !s.is_empty() {
                return Some(normalizer.absolutize(s));
            }
        }
    }
    raw.embedded_media
        .iter()
        .find(|m| m.media_type == "video" || m.mime_type.starts_with("video/"))
        .map(|m| m.source_url.clone())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PageRecord;
    use serde_json::json;

    #[test]
    fn embedded_video_backs_missing_field() {
        let page: PageRecord = serde_json::from_value(json!({
            "id": 1,
            "title": { "rendered": "NextGen" },
            "acf": {},
            "_embedded": {
                "wp:featuredmedia": [{
                    "id": 3,
                    "source_url": "https://cms.example.com/banner.mp4",
                    "media_type": "file",
                    "mime_type": "video/mp4"
                }]
            }
        }))
        .unwrap();
        let raw = RawContent::from_page(&page);
        let client = CmsClient::new(crate::config::CmsConfig::default());
        let normalizer = FieldNormalizer::new(&client);
        assert_eq!(
            video_url(&raw, &normalizer).unwrap(),
            "https://cms.example.com/banner.mp4"
        );
    }

    #[test]
    fn non_video_featured_media_is_ignored() {
        let page: PageRecord = serde_json::from_value(json!({
            "id": 1,
            "acf": {},
            "_embedded": {
                "wp:featuredmedia": [{
                    "id": 3,
                    "source_url": "https://cms.example.com/photo.png",
                    "media_type": "image",
                    "mime_type": "image/png"
                }]
            }
        }))
        .unwrap();
        let raw = RawContent::from_page(&page);
        let client = CmsClient::new(crate::config::CmsConfig::default());
        let normalizer = FieldNormalizer::new(&client);
        assert!(video_url(&raw, &normalizer).is_none());
    }
}
