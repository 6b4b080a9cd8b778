use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::client::CmsClient;

/// A render-ready image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedImage {
    pub url: String,
    pub alt: String,
}

/// Coerces raw custom-field values into render-ready shapes. Every method
/// returns a usable value; nothing here surfaces an error to the caller.
pub struct FieldNormalizer<'a> {
    client: &'a CmsClient,
}

impl<'a> FieldNormalizer<'a> {
    pub fn new(client: &'a CmsClient) -> Self {
        Self { client }
    }

    /// Plain-text field with a constant default.
    pub fn text(raw: Option<&Value>, default: &str) -> String {
        match raw.and_then(Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default.to_string(),
        }
    }

    /// Newline-delimited list: empty segments dropped, order preserved.
    /// Arrays pass through; anything else resolves to an empty list.
    pub fn points(raw: Option<&Value>) -> Vec<String> {
        match raw {
            Some(Value::String(text)) => text
                .split('\n')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Resolves a media reference to an absolute URL, in order: direct URL
    /// string, object `url`, object `sizes` (large, medium, full), object
    /// `guid`, numeric id via the media endpoint. `None` when nothing
    /// matches or the secondary lookup fails.
    pub async fn image_url(&self, raw: Option<&Value>) -> Option<String> {
        let found = match raw {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(value @ Value::Object(_)) => url_from_object(value),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(id) => self.url_from_media_id(id).await,
                None => None,
            },
            _ => None,
        };
        found.map(|url| self.absolutize(&url))
    }

    /// [`image_url`] plus alt text and the caller's defaults.
    pub async fn image(
        &self,
        raw: Option<&Value>,
        default_url: &str,
        default_alt: &str,
    ) -> ResolvedImage {
        let url = self
            .image_url(raw)
            .await
            .unwrap_or_else(|| default_url.to_string());
        let alt = alt_text(raw).unwrap_or_else(|| default_alt.to_string());
        ResolvedImage { url, alt }
    }

    async fn url_from_media_id(&self, id: u64) -> Option<String> {
        match self.client.media_by_id(id).await {
            Ok(media) => Some(media.source_url),
            Err(err) => {
                warn!("media lookup for id {} failed: {}", id, err);
                None
            }
        }
    }

    /// Prefixes scheme-less paths with the configured origin. Absolute and
    /// protocol-relative URLs pass through unchanged.
    pub fn absolutize(&self, url: &str) -> String {
        if url.is_empty() || url.starts_with("//") || Url::parse(url).is_ok() {
            return url.to_string();
        }
        let base = self.client.config().base_origin();
        if url.starts_with('/') {
            format!("{}{}", base, url)
        } else {
            format!("{}/{}", base, url)
        }
    }
}

fn url_from_object(value: &Value) -> Option<String> {
    if let Some(url) = value.get("url").and_then(Value::as_str) {
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }
    if let Some(sizes) = value.get("sizes") {
        for size in ["large", "medium", "full"] {
            if let Some(url) = sizes.get(size).and_then(Value::as_str) {
                if !url.is_empty() {
                    return Some(url.to_string());
                }
            }
        }
    }
    match value.get("guid") {
        // Media records wrap the guid in a rendered envelope; ACF sends it bare.
        Some(Value::String(guid)) if !guid.is_empty() => return Some(guid.clone()),
        Some(guid) => {
            if let Some(rendered) = guid.get("rendered").and_then(Value::as_str) {
                if !rendered.is_empty() {
                    return Some(rendered.to_string());
                }
            }
        }
        None => {}
    }
    None
}

/// Alt text carried on a media object, when there is one.
pub fn alt_text(raw: Option<&Value>) -> Option<String> {
    let value = raw?;
    for key in ["alt", "alt_text"] {
        if let Some(alt) = value.get(key).and_then(Value::as_str) {
            if !alt.is_empty() {
                return Some(alt.to_string());
            }
        }
    }
    None
}
