use serde::{Deserialize, Serialize};

/// What a view receives from a provider. Loading takes precedence over
/// `error`; an error never removes the fallback-filled data, so a page can
/// always render complete (if degraded) content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> ContentState<T> {
    /// Initial state while a fetch is in flight.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: None,
        }
    }

    /// Complete fallback data plus a passive notice for the view.
    pub fn degraded(data: T, notice: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            error: Some(notice.into()),
        }
    }
}
