use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("No content found for slug: {0}")]
    NotFound(String),

    #[error("Media lookup error: {0}")]
    MediaError(String),

    #[error("Fetch error: {0}")]
    FetchError(String),
}

impl From<&str> for ContentError {
    fn from(error: &str) -> Self {
        ContentError::FetchError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
