use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::{alt_text, FieldNormalizer, ResolvedImage};
use crate::state::ContentState;

pub const DEFAULT_TITLE: &str = "Why Choose Us";
pub const DEFAULT_IMAGE: &str = "/asset/image/team.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyChooseUs {
    pub title: String,
    pub subtitle: String,
    pub image: ResolvedImage,
    pub items: Vec<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for WhyChooseUs {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            image: ResolvedImage {
                url: DEFAULT_IMAGE.to_string(),
                alt: DEFAULT_TITLE.to_string(),
            },
            items: Vec::new(),
            last_updated: None,
        }
    }
}

const WANTED: &[&str] = &[
    "why_choose_us_title",
    "title",
    "why_choose_us_subtitle",
    "subtitle",
    "sub_title",
    "why_choose_us_image",
    "image",
    "items",
];

/// Image fields tried in order; the page's featured media is the final
/// candidate.
const IMAGE_FIELDS: &[&str] = &["image", "why_choose_us_image"];

pub async fn load(client: &CmsClient) -> ContentState<WhyChooseUs> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [
        FetchStrategy::AcfOptions,
        FetchStrategy::PageBySlug("why-choose-us".to_string()),
        FetchStrategy::PageById(client.config().home_page_id),
    ];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(
                WhyChooseUs::default(),
                "Why Choose Us content not found",
            );
        }
    };

    let normalizer = FieldNormalizer::new(client);

    let title_default = raw.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let title = FieldNormalizer::text(
        raw.field("why_choose_us_title").or_else(|| raw.field("title")),
        &title_default,
    )
    .trim()
    .to_string();
    let subtitle = FieldNormalizer::text(
        raw.field("why_choose_us_subtitle")
            .or_else(|| raw.field("subtitle"))
            .or_else(|| raw.field("sub_title")),
        "",
    )
    .trim()
    .to_string();

    let mut image = ResolvedImage {
        url: DEFAULT_IMAGE.to_string(),
        alt: title.clone(),
    };
    let candidates = IMAGE_FIELDS
        .iter()
        .filter_map(|name| raw.field(name))
        .chain(raw.featured_media.as_ref());
    for candidate in candidates {
        if let Some(url) = normalizer.image_url(Some(candidate)).await {
            image = ResolvedImage {
                url,
                alt: alt_text(Some(candidate)).unwrap_or_else(|| title.clone()),
            };
            break;
        }
    }

    let items = FieldNormalizer::points(raw.field("items"));

    ContentState::ready(WhyChooseUs {
        title,
        subtitle,
        image,
        items,
        last_updated: Some(Utc::now()),
    })
}
