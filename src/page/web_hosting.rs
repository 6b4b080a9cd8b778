use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::client::CmsClient;
use crate::fetch::{ContentFetcher, FetchStrategy};
use crate::normalize::FieldNormalizer;
use crate::state::ContentState;

pub const PAGE_SLUG: &str = "web-hosting-plans";

const PLAN_NAMES: [&str; 5] = ["Basic", "Standard", "Value", "Premium", "Business"];
const PLAN_PRICES: [&str; 5] = ["K55", "K110", "K220", "K440", "K880"];

/// Editors may carry the price inside the plan title, e.g. "Value (K220)".
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((K\d+)\)").expect("price pattern"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostingPlan {
    pub title: String,
    pub price: String,
    pub period: String,
    pub sub_description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

/// A raw numbered section, exposed alongside the derived plan table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSection {
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebHostingData {
    pub page_title: String,
    pub page_description: String,
    pub plans: Vec<HostingPlan>,
    pub sections: Vec<TextSection>,
}

impl Default for WebHostingData {
    fn default() -> Self {
        Self {
            page_title: "Web Hosting".to_string(),
            page_description: "Plans".to_string(),
            plans: default_plans(),
            sections: (0..5)
                .map(|_| TextSection {
                    title: String::new(),
                    description: String::new(),
                    points: Vec::new(),
                })
                .collect(),
        }
    }
}

pub fn default_plans() -> Vec<HostingPlan> {
    let features: [&[&str]; 5] = [
        &[
            "1 domain / 1 website",
            "7 POP3 email accounts",
            "200MB disk space per mailbox",
            "2GB monthly traffic",
            "1 MySQL database",
            "No cPanel access",
        ],
        &[
            "3 domains / 3 websites",
            "15 POP3 email accounts",
            "400MB disk space per mailbox",
            "4GB monthly traffic",
            "2 MySQL databases",
            "No cPanel access",
        ],
        &[
            "7 domains / 7 websites",
            "30 POP3 email accounts",
            "1GB disk space per mailbox",
            "10GB monthly traffic",
            "5 MySQL databases",
            "With cPanel access",
        ],
        &[
            "Unlimited domains/websites",
            "Unlimited email accounts",
            "2GB disk space per mailbox",
            "30GB monthly traffic",
            "Unlimited MySQL databases",
            "With cPanel access",
            "Free SSL certificate",
        ],
        &[
            "Unlimited domains/websites",
            "Unlimited email accounts",
            "5GB disk space per mailbox",
            "Unmetered traffic",
            "Unlimited MySQL databases",
            "With cPanel access",
            "Free SSL certificate",
            "Dedicated IP",
            "Priority support",
        ],
    ];
    PLAN_NAMES
        .iter()
        .zip(PLAN_PRICES.iter())
        .zip(features.iter())
        .enumerate()
        .map(|(i, ((name, price), features))| HostingPlan {
            title: name.to_string(),
            price: price.to_string(),
            period: "/month".to_string(),
            sub_description: String::new(),
            features: features.iter().map(|f| f.to_string()).collect(),
            popular: i == 2,
        })
        .collect()
}

const WANTED: &[&str] = &[
    "page_title",
    "sub_title_1",
    "sub_title_2",
    "sub_title_3",
    "sub_title_4",
    "sub_title_5",
];

pub async fn load(client: &CmsClient) -> ContentState<WebHostingData> {
    let fetcher = ContentFetcher::new(client);
    let strategies = [FetchStrategy::PageBySlug(PAGE_SLUG.to_string())];

    let raw = match fetcher.fetch_first(&strategies, WANTED).await {
        Some(raw) => raw,
        None => {
            return ContentState::degraded(
                WebHostingData::default(),
                "Failed to load web hosting plans content. Please try again later.",
            );
        }
    };

    let defaults = WebHostingData::default();
    let mut plans = Vec::with_capacity(5);
    let mut sections = Vec::with_capacity(5);

    for index in 1..=5 {
        let section_title = FieldNormalizer::text(
            raw.field(&format!("sub_title_{}", index)),
            PLAN_NAMES[index - 1],
        );
        let description =
            FieldNormalizer::text(raw.field(&format!("sub_description_{}", index)), "");
        let features = FieldNormalizer::points(raw.field(&format!("bullet_points_{}", index)));

        let (title, price) = split_price(&section_title, PLAN_PRICES[index - 1]);
        plans.push(HostingPlan {
            title: if title.is_empty() {
                format!("Plan {}", index)
            } else {
                title
            },
            price,
            period: "/month".to_string(),
            sub_description: description.clone(),
            features: if features.is_empty() {
                default_plans()[index - 1].features.clone()
            } else {
                features.clone()
            },
            popular: index == 3,
        });
        sections.push(TextSection {
            title: FieldNormalizer::text(
                raw.field(&format!("sub_title_{}", index)),
                &format!("Plan {}", index),
            ),
            description,
            points: features,
        });
    }

    ContentState::ready(WebHostingData {
        page_title: FieldNormalizer::text(raw.field("page_title"), &defaults.page_title),
        page_description: FieldNormalizer::text(
            raw.field("page_description"),
            &defaults.page_description,
        ),
        plans,
        sections,
    })
}

/// Splits `"Value (K220)"` into `("Value", "K220")`; titles without an
/// embedded price keep the slot's default.
fn split_price(title: &str, default_price: &str) -> (String, String) {
    match PRICE_PATTERN.captures(title) {
        Some(captures) => {
            let price = captures[1].to_string();
            let stripped = PRICE_PATTERN.replace(title, "").trim().to_string();
            (stripped, price)
        }
        None => (title.trim().to_string(), default_price.to_string()),
    }
}
