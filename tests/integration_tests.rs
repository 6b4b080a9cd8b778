use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use nextgen_content_base::cache::testing::FakeClock;
use nextgen_content_base::cache::TimedCache;
use nextgen_content_base::page::products::{ProductCatalog, CACHE_TTL};
use nextgen_content_base::page::{cctv, document_management, hero, why_choose_us};
use nextgen_content_base::{CmsClient, CmsConfig, CmsTransport, ContentError, Result};

/// In-memory content source. Responses are keyed by endpoint; a missing
/// key behaves like a network failure.
struct FakeCms {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCms {
    fn new(responses: HashMap<String, Value>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn key(url: &str, query: &[(&str, String)]) -> String {
        if url.contains("/options/") {
            return "options".to_string();
        }
        if let Some((_, slug)) = query.iter().find(|(k, _)| *k == "slug") {
            return format!("pages:{}", slug);
        }
        if let Some(id) = url.split("/media/").nth(1) {
            return format!("media:{}", id);
        }
        if url.ends_with("/posts") {
            return "posts".to_string();
        }
        if let Some(id) = url.split("/pages/").nth(1) {
            return format!("page_id:{}", id);
        }
        url.to_string()
    }

    fn calls_for(&self, key: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|k| k.as_str() == key)
            .count()
    }

    fn remove(&self, key: &str) {
        self.responses.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl CmsTransport for FakeCms {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let key = Self::key(url, query);
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| ContentError::FetchError(format!("no response for {}", key)))
    }
}

fn client(transport: Arc<FakeCms>) -> CmsClient {
    let config = CmsConfig {
        base_url: "https://cms.example.com".to_string(),
        ..Default::default()
    };
    CmsClient::with_transport(config, transport)
}

#[tokio::test]
async fn missing_page_renders_the_exact_default_record() {
    // The slug resolves to an empty array: no record, not a transport error.
    let cms = FakeCms::new(HashMap::from([("pages:home".to_string(), json!([]))]));
    let state = hero::load(&client(cms)).await;

    assert!(!state.is_loading);
    assert!(state.error.is_some());
    assert_eq!(state.data.unwrap(), hero::HeroContent::default());
}

#[tokio::test]
async fn unreachable_source_renders_the_exact_default_record() {
    // Every strategy fails: ACF options, both page lookups.
    let cms = FakeCms::new(HashMap::new());
    let state = why_choose_us::load(&client(cms)).await;

    assert!(state.error.is_some());
    let data = state.data.unwrap();
    let defaults = why_choose_us::WhyChooseUs::default();
    assert_eq!(data.title, defaults.title);
    assert_eq!(data.subtitle, defaults.subtitle);
    assert_eq!(data.image, defaults.image);
    assert_eq!(data.items, defaults.items);
}

#[tokio::test]
async fn populated_hero_fields_are_normalized_and_absolutized() {
    let cms = FakeCms::new(HashMap::from([(
        "pages:home".to_string(),
        json!([{
            "id": 1,
            "slug": "home",
            "title": { "rendered": "NextGen Technology Limited" },
            "acf": {
                "title": "Build With Us",
                "sub_title": "From the edge to the core",
                "background_video": "/wp-content/uploads/banner.mp4"
            }
        }]),
    )]));
    let state = hero::load(&client(cms)).await;

    assert!(state.error.is_none());
    let data = state.data.unwrap();
    assert_eq!(data.title, "Build With Us");
    assert_eq!(data.subtitle, "From the edge to the core");
    assert_eq!(
        data.video_url,
        "https://cms.example.com/wp-content/uploads/banner.mp4"
    );
}

#[tokio::test]
async fn partial_record_merges_source_fields_with_defaults() {
    // sub_title_1 present, sub_image_1 absent: the title comes from the
    // source and the image falls back to the bundled default.
    let cms = FakeCms::new(HashMap::from([(
        format!("pages:{}", document_management::PAGE_SLUG),
        json!([{
            "id": 12,
            "acf": { "sub_title_1": "Paperless Office Suite" }
        }]),
    )]));
    let state = document_management::load(&client(cms)).await;

    assert!(state.error.is_none());
    let data = state.data.unwrap();
    assert_eq!(data.sections[0].title, "Paperless Office Suite");
    assert_eq!(data.sections[0].image.url, "/asset/image/dokmee.png");
    assert_eq!(data.sections[0].image.alt, "Paperless Office Suite");
    // Untouched section keeps its full default.
    assert_eq!(data.sections[1].title, "Microsoft 365 Office");
}

#[tokio::test]
async fn failed_media_lookup_falls_back_per_field() {
    // image_1 is a numeric reference and the media endpoint is down; the
    // rest of the record must still resolve.
    let cms = FakeCms::new(HashMap::from([(
        format!("pages:{}", cctv::PAGE_SLUG),
        json!([{
            "id": 8,
            "acf": {
                "page_title": "Surveillance",
                "sub_title_1": "Dome Camera",
                "image_1": 77
            }
        }]),
    )]));
    let state = cctv::load(&client(cms)).await;

    let data = state.data.unwrap();
    assert_eq!(data.page_title, "Surveillance");
    assert_eq!(data.sections[0].title, "Dome Camera");
    assert_eq!(data.sections[0].image.url, "/asset/image/cctv1.jpg");
}

#[tokio::test]
async fn numeric_media_reference_resolves_through_secondary_lookup() {
    let cms = FakeCms::new(HashMap::from([
        (
            format!("pages:{}", cctv::PAGE_SLUG),
            json!([{ "id": 8, "acf": { "sub_title_1": "Dome Camera", "image_1": 77 } }]),
        ),
        (
            "media:77".to_string(),
            json!({
                "id": 77,
                "source_url": "/wp-content/uploads/dome.jpg",
                "alt_text": "Dome"
            }),
        ),
    ]));
    let state = cctv::load(&client(cms)).await;

    let data = state.data.unwrap();
    assert_eq!(
        data.sections[0].image.url,
        "https://cms.example.com/wp-content/uploads/dome.jpg"
    );
}

fn product_posts() -> Value {
    json!([{
        "id": 31,
        "slug": "firewall-appliance",
        "title": { "rendered": "Firewall Appliance" },
        "excerpt": { "rendered": "Perimeter defense." },
        "acf": { "price": 4999.0 }
    }])
}

#[tokio::test]
async fn product_fetches_inside_the_window_share_one_network_call() {
    let cms = FakeCms::new(HashMap::from([("posts".to_string(), product_posts())]));
    let clock = Arc::new(FakeClock::default());
    let catalog = ProductCatalog::with_cache(
        client(cms.clone()),
        TimedCache::with_clock(CACHE_TTL, clock.clone()),
    );

    let first = catalog.load().await;
    let second = catalog.load().await;
    assert_eq!(first.data.unwrap(), second.data.unwrap());
    assert_eq!(cms.calls_for("posts"), 1);

    // Past the window the next read revalidates.
    clock.advance(CACHE_TTL.as_millis() as u64);
    let third = catalog.load().await;
    assert!(third.error.is_none());
    assert_eq!(cms.calls_for("posts"), 2);
}

#[tokio::test]
async fn expired_cache_serves_stale_products_when_the_fetch_fails() {
    let cms = FakeCms::new(HashMap::from([("posts".to_string(), product_posts())]));
    let clock = Arc::new(FakeClock::default());
    let catalog = ProductCatalog::with_cache(
        client(cms.clone()),
        TimedCache::with_clock(CACHE_TTL, clock.clone()),
    );

    let first = catalog.load().await;
    assert!(first.error.is_none());

    cms.remove("posts");
    clock.advance(CACHE_TTL.as_millis() as u64 + 1);
    let stale = catalog.load().await;
    assert!(stale.error.is_some());
    assert_eq!(stale.data.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_catalog_is_the_terminal_product_fallback() {
    let cms = FakeCms::new(HashMap::new());
    let catalog = ProductCatalog::new(client(cms));
    let state = catalog.load().await;

    assert!(state.error.is_some());
    assert!(state.data.unwrap().is_empty());
}
