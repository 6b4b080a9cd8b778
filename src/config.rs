use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Connection settings for the WordPress content source.
///
/// Loaded from a YAML file or assembled from environment variables; every
/// field has a working local-development default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Site root, e.g. `https://cms.example.com` or `http://localhost/wp-cms`.
    pub base_url: String,

    /// Application password sent as a bearer token when present.
    #[serde(default)]
    pub auth_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page id used as the last-resort content lookup for the home page.
    #[serde(default = "default_home_page_id")]
    pub home_page_id: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_home_page_id() -> u64 {
    42
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/wp-cms".to_string(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
            home_page_id: default_home_page_id(),
        }
    }
}

impl CmsConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        if config.base_url.is_empty() {
            return Err(ContentError::ConfigError(
                "base_url must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Defaults overridden by `CMS_BASE_URL` / `CMS_AUTH_TOKEN` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("CMS_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(token) = std::env::var("CMS_AUTH_TOKEN") {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }
        config
    }

    /// Root of the core REST API (`wp/v2`).
    pub fn rest_url(&self) -> String {
        format!("{}/wp-json/wp/v2", self.base_origin())
    }

    /// Root of the custom-fields REST extension (`acf/v3`).
    pub fn acf_url(&self) -> String {
        format!("{}/wp-json/acf/v3", self.base_origin())
    }

    /// Origin used to rewrite relative media paths into absolute URLs.
    pub fn base_origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
