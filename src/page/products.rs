use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::TimedCache;
use crate::client::CmsClient;
use crate::error::Result;
use crate::normalize::{FieldNormalizer, ResolvedImage};
use crate::record::PostRecord;
use crate::state::ContentState;

pub const PRODUCTS_CATEGORY: &str = "products";
pub const PRODUCTS_PER_PAGE: u32 = 12;
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// One product post, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub price: Option<f64>,
    pub features: Vec<String>,
    pub category: Option<String>,
    pub link: Option<String>,
    pub image: Option<ResolvedImage>,
}

/// Product listing backed by the posts endpoint, with a single shared
/// cache slot: fresh hits skip the network, fetch failures serve the last
/// stored set regardless of age, and an empty catalog is the terminal
/// fallback.
pub struct ProductCatalog {
    client: CmsClient,
    cache: TimedCache<Vec<Product>>,
}

impl ProductCatalog {
    pub fn new(client: CmsClient) -> Self {
        Self::with_cache(client, TimedCache::new(CACHE_TTL))
    }

    pub fn with_cache(client: CmsClient, cache: TimedCache<Vec<Product>>) -> Self {
        Self { client, cache }
    }

    pub async fn load(&self) -> ContentState<Vec<Product>> {
        if let Some(products) = self.cache.fresh() {
            debug!("serving {} products from cache", products.len());
            return ContentState::ready(products);
        }

        match self.fetch().await {
            Ok(products) => {
                self.cache.store(products.clone());
                ContentState::ready(products)
            }
            Err(err) => {
                warn!("product fetch failed: {}", err);
                match self.cache.any() {
                    Some(stale) => {
                        ContentState::degraded(stale, "Showing previously loaded products")
                    }
                    None => ContentState::degraded(
                        Vec::new(),
                        "Failed to load products. Please try again later.",
                    ),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>> {
        let posts = self
            .client
            .posts_by_category(PRODUCTS_CATEGORY, PRODUCTS_PER_PAGE)
            .await?;
        Ok(posts.iter().map(product_from_post).collect())
    }
}

fn product_from_post(post: &PostRecord) -> Product {
    let fields = post.fields();
    let image = post
        .embedded
        .as_ref()
        .and_then(|e| e.featured_media.first())
        .filter(|m| !m.source_url.is_empty())
        .map(|m| ResolvedImage {
            url: m.source_url.clone(),
            alt: m.alt_text.clone(),
        });
    Product {
        id: post.id,
        title: post.title.rendered.clone(),
        excerpt: post.excerpt.rendered.clone(),
        slug: post.slug.clone(),
        price: fields.get("price").and_then(Value::as_f64),
        features: FieldNormalizer::points(fields.get("features")),
        category: string_field(&fields, "category"),
        link: string_field(&fields, "link"),
        image,
    }
}

fn string_field(fields: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn posts_flatten_into_products() {
        let post: PostRecord = serde_json::from_value(json!({
            "id": 31,
            "slug": "firewall-appliance",
            "title": { "rendered": "Firewall Appliance" },
            "excerpt": { "rendered": "<p>Perimeter defense.</p>" },
            "acf": {
                "price": 4999.0,
                "features": "Stateful inspection\nVPN gateway",
                "category": "security"
            },
            "_embedded": {
                "wp:featuredmedia": [{
                    "id": 5,
                    "source_url": "https://cms.example.com/firewall.png",
                    "alt_text": "Firewall"
                }]
            }
        }))
        .unwrap();

        let product = product_from_post(&post);
        assert_eq!(product.id, 31);
        assert_eq!(product.price, Some(4999.0));
        assert_eq!(product.features, vec!["Stateful inspection", "VPN gateway"]);
        assert_eq!(product.category.as_deref(), Some("security"));
        assert_eq!(
            product.image.as_ref().unwrap().url,
            "https://cms.example.com/firewall.png"
        );
    }

    #[test]
    fn bare_post_still_maps() {
        let post: PostRecord = serde_json::from_value(json!({
            "id": 32,
            "slug": "bare",
            "title": { "rendered": "Bare" }
        }))
        .unwrap();
        let product = product_from_post(&post);
        assert!(product.price.is_none());
        assert!(product.features.is_empty());
        assert!(product.image.is_none());
    }
}
