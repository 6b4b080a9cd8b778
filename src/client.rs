use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tokio::time::Duration;

use crate::config::CmsConfig;
use crate::error::{ContentError, Result};
use crate::record::{MediaRecord, PageRecord, PostRecord};

/// Read-only JSON transport to the content source. The production
/// implementation is [`ReqwestTransport`]; tests substitute an in-memory one.
#[async_trait]
pub trait CmsTransport: Send + Sync {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    auth_token: Option<String>,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            auth_token: config.auth_token.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl CmsTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value> {
        let mut request = self.client.get(url).query(query).timeout(self.timeout);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Typed access to the endpoints the site consumes.
#[derive(Clone)]
pub struct CmsClient {
    transport: Arc<dyn CmsTransport>,
    config: CmsConfig,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(&config));
        Self { transport, config }
    }

    pub fn with_transport(config: CmsConfig, transport: Arc<dyn CmsTransport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// `GET /pages?slug=..`. The API answers with an array; the first
    /// element is the match, an empty array means no such page.
    pub async fn page_by_slug(&self, slug: &str) -> Result<PageRecord> {
        let url = format!("{}/pages", self.config.rest_url());
        let query = [
            ("slug", slug.to_string()),
            ("_embed", "true".to_string()),
            ("acf_format", "standard".to_string()),
        ];
        let value = self.transport.get_json(&url, &query).await?;
        let mut pages: Vec<PageRecord> = serde_json::from_value(value)?;
        if pages.is_empty() {
            Err(ContentError::NotFound(slug.to_string()))
        } else {
            Ok(pages.remove(0))
        }
    }

    pub async fn page_by_id(&self, id: u64) -> Result<PageRecord> {
        let url = format!("{}/pages/{}", self.config.rest_url(), id);
        let query = [
            ("_embed", "true".to_string()),
            ("acf_format", "standard".to_string()),
        ];
        let value = self.transport.get_json(&url, &query).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Post listing filtered by category, with featured media embedded.
    pub async fn posts_by_category(&self, category: &str, per_page: u32) -> Result<Vec<PostRecord>> {
        let url = format!("{}/posts", self.config.rest_url());
        let query = [
            ("categories", category.to_string()),
            ("per_page", per_page.to_string()),
            ("_embed", "wp:featuredmedia".to_string()),
            ("_fields", "id,title,slug,excerpt,acf,_links,_embedded".to_string()),
        ];
        let value = self.transport.get_json(&url, &query).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Resolves a numeric media reference to its full record.
    pub async fn media_by_id(&self, id: u64) -> Result<MediaRecord> {
        let url = format!("{}/media/{}", self.config.rest_url(), id);
        let value = self.transport.get_json(&url, &[]).await?;
        let media: MediaRecord = serde_json::from_value(value)?;
        if media.source_url.is_empty() {
            return Err(ContentError::MediaError(format!(
                "media {} has no source url",
                id
            )));
        }
        Ok(media)
    }

    /// Site-wide custom fields from the ACF options endpoint.
    pub async fn acf_options(&self) -> Result<Value> {
        let url = format!("{}/options/options", self.config.acf_url());
        self.transport.get_json(&url, &[]).await
    }
}
