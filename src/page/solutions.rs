use serde::{Deserialize, Serialize};

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::FieldNormalizer;
use crate::state::ContentState;

/// One entry on the home page's solutions strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

pub fn default_solutions() -> Vec<Solution> {
    vec![
        Solution {
            title: "Document Management".to_string(),
            description: "Efficient and secure document handling solutions".to_string(),
            image: "/asset/image/dokmee.png".to_string(),
            link: "/services/document-management".to_string(),
        },
        Solution {
            title: "CCTV Solutions".to_string(),
            description: "Advanced surveillance and security camera systems".to_string(),
            image: "/asset/image/cctv1.jpg".to_string(),
            link: "/services/cctv".to_string(),
        },
        Solution {
            title: "Web & Domain Hosting".to_string(),
            description: "Reliable web hosting and domain registration".to_string(),
            image: "/asset/image/domain.png".to_string(),
            link: "/services/web-hosting".to_string(),
        },
    ]
}

const WANTED: &[&str] = &["title1", "title2", "title3", "image1", "image2", "image3"];

pub async fn load(client: &CmsClient) -> ContentState<Vec<Solution>> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [
        FetchStrategy::PageBySlug("our-solutions".to_string()),
        FetchStrategy::PageBySlug("home".to_string()),
    ];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(
                default_solutions(),
                "Failed to load solutions. Using default content.",
            );
        }
    };

    let normalizer = FieldNormalizer::new(client);
    let mut solutions = Vec::new();

    for index in 1..=3 {
        let title = raw
            .field(&format!("title{}", index))
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let description =
            FieldNormalizer::text(raw.field(&format!("sub_title{}", index)), "");
        let image = normalizer
            .image_url(raw.field(&format!("image{}", index)))
            .await;

        // An entry needs a title or an image to be worth rendering.
        if title.is_none() && image.is_none() {
            continue;
        }
        let link = match &title {
            Some(title) => format!("/services/{}", kebab_case(title)),
            None => format!("#solution-{}", index),
        };
        solutions.push(Solution {
            title: title.unwrap_or_else(|| format!("Solution {}", index)),
            description,
            image: image.unwrap_or_default(),
            link,
        });
    }

    if solutions.is_empty() {
        return ContentState::degraded(
            default_solutions(),
            "No solutions found in page content. Using default content.",
        );
    }
    ContentState::ready(solutions)
}

fn kebab_case(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
