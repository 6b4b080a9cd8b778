use serde::{Deserialize, Serialize};

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::{alt_text, FieldNormalizer, ResolvedImage};
use crate::page::{load_section, ServiceSection};
use crate::state::ContentState;

pub const PAGE_SLUG: &str = "document-management-solutions";

/// Document-management service page: a heading, two product sections and
/// an optional mobile background image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentManagementData {
    pub page_title: String,
    pub page_description: String,
    pub sections: Vec<ServiceSection>,
    pub mobile_background: Option<ResolvedImage>,
}

impl Default for DocumentManagementData {
    fn default() -> Self {
        Self {
            page_title: "Document".to_string(),
            page_description: "Management Solutions".to_string(),
            sections: vec![
                ServiceSection {
                    title: "Dokmee Document Management".to_string(),
                    description: "Enterprise-class document management solution designed to help \
                                  businesses of all sizes efficiently capture, manage, and store \
                                  documents while maintaining security and compliance."
                        .to_string(),
                    points: vec![
                        "Secure cloud-based document storage".to_string(),
                        "Advanced OCR (Optical Character Recognition)".to_string(),
                        "Automated document capture and indexing".to_string(),
                        "Version control and audit trails".to_string(),
                    ],
                    image: ResolvedImage {
                        url: "/asset/image/dokmee.png".to_string(),
                        alt: "Dokmee Document Management".to_string(),
                    },
                },
                ServiceSection {
                    title: "Microsoft 365 Office".to_string(),
                    description: "Comprehensive productivity suite with powerful document \
                                  management capabilities, seamlessly integrated with familiar \
                                  Office applications."
                        .to_string(),
                    points: vec![
                        "Cloud storage with OneDrive/SharePoint".to_string(),
                        "Real-time co-authoring".to_string(),
                        "Advanced security features".to_string(),
                        "Seamless Office integration".to_string(),
                    ],
                    image: ResolvedImage {
                        url: "/asset/image/office365.jpg".to_string(),
                        alt: "Microsoft 365 Office".to_string(),
                    },
                },
            ],
            mobile_background: None,
        }
    }
}

const WANTED: &[&str] = &[
    "page_title",
    "page_description",
    "sub_title_1",
    "sub_title_2",
    "sub_image_1",
    "sub_image_2",
];

pub async fn load(client: &CmsClient) -> ContentState<DocumentManagementData> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [FetchStrategy::PageBySlug(PAGE_SLUG.to_string())];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(
                DocumentManagementData::default(),
                "Failed to load document management content. Please try again later.",
            );
        }
    };

    let normalizer = FieldNormalizer::new(client);
    let defaults = DocumentManagementData::default();

    let mut sections = Vec::with_capacity(defaults.sections.len());
    for (index, default) in defaults.sections.iter().enumerate() {
        sections.push(
            load_section(&normalizer, &raw, index + 1, "sub_points", "sub_image", default).await,
        );
    }

    let mobile_background = match raw.field("mobile_background") {
        Some(value) => normalizer.image_url(Some(value)).await.map(|url| {
            let alt = FieldNormalizer::text(
                raw.field("mobile_background_alt"),
                &alt_text(Some(value)).unwrap_or_else(|| "Mobile Background".to_string()),
            );
            ResolvedImage { url, alt }
        }),
        None => None,
    };

    ContentState::ready(DocumentManagementData {
        page_title: FieldNormalizer::text(raw.field("page_title"), &defaults.page_title),
        page_description: FieldNormalizer::text(
            raw.field("page_description"),
            &defaults.page_description,
        ),
        sections,
        mobile_background,
    })
}
