use serde::{Deserialize, Serialize};

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::{FieldNormalizer, ResolvedImage};
use crate::page::{load_section, ServiceSection};
use crate::state::ContentState;

pub const PAGE_SLUG: &str = "advanced-cctv-security-solutions";

/// CCTV service page: a heading plus three product sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CctvData {
    pub page_title: String,
    pub page_description: String,
    pub sections: Vec<ServiceSection>,
}

impl Default for CctvData {
    fn default() -> Self {
        Self {
            page_title: "Advanced CCTV".to_string(),
            page_description: "Security Solutions".to_string(),
            sections: vec![
                ServiceSection {
                    title: "Holowits X Series HWT-X6741".to_string(),
                    description: "4MP Super-low Light Full Control Dual Lens AI PTZ Dome Camera \
                                  for 24/7 surveillance in any lighting condition."
                        .to_string(),
                    points: vec![
                        "4MP Ultra HD resolution".to_string(),
                        "Super-low light technology".to_string(),
                        "Dual lens AI PTZ control".to_string(),
                        "Weatherproof IP67 rated design".to_string(),
                    ],
                    image: ResolvedImage {
                        url: "/asset/image/cctv1.jpg".to_string(),
                        alt: "Holowits X Series HWT-X6741".to_string(),
                    },
                },
                ServiceSection {
                    title: "Smart Motion Detection".to_string(),
                    description: "Advanced algorithms that distinguish between relevant motion \
                                  events and false alarms."
                        .to_string(),
                    points: vec![
                        "AI-powered detection".to_string(),
                        "Real-time alerts".to_string(),
                        "Customizable zones".to_string(),
                        "Reduced false alarms".to_string(),
                    ],
                    image: ResolvedImage {
                        url: "/asset/image/cctv2.png".to_string(),
                        alt: "Smart Motion Detection".to_string(),
                    },
                },
                ServiceSection {
                    title: "Remote Monitoring".to_string(),
                    description: "Access your camera feeds from anywhere using your smartphone \
                                  or computer."
                        .to_string(),
                    points: vec![
                        "Mobile app access".to_string(),
                        "Cloud storage options".to_string(),
                        "Multi-user access".to_string(),
                        "Secure encryption".to_string(),
                    ],
                    image: ResolvedImage {
                        url: "/asset/image/cctv3.png".to_string(),
                        alt: "Remote Monitoring".to_string(),
                    },
                },
            ],
        }
    }
}

const WANTED: &[&str] = &[
    "page_title",
    "page_description",
    "sub_title_1",
    "sub_title_2",
    "sub_title_3",
];

pub async fn load(client: &CmsClient) -> ContentState<CctvData> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [FetchStrategy::PageBySlug(PAGE_SLUG.to_string())];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(
                CctvData::default(),
                "Failed to load CCTV solutions content. Please try again later.",
            );
        }
    };

    let normalizer = FieldNormalizer::new(client);
    let defaults = CctvData::default();

    let mut sections = Vec::with_capacity(defaults.sections.len());
    for (index, default) in defaults.sections.iter().enumerate() {
        sections.push(
            load_section(&normalizer, &raw, index + 1, "bullet_points", "image", default).await,
        );
    }

    ContentState::ready(CctvData {
        page_title: FieldNormalizer::text(raw.field("page_title"), &defaults.page_title),
        page_description: FieldNormalizer::text(
            raw.field("page_description"),
            &defaults.page_description,
        ),
        sections,
    })
}
