use tracing::{debug, warn};

use crate::client::CmsClient;
use crate::error::Result;
use crate::record::RawContent;

/// One way to locate a content record. Providers declare an ordered list;
/// the fetcher stops at the first usable response.
#[derive(Debug, Clone)]
pub enum FetchStrategy {
    /// Site-wide ACF options endpoint.
    AcfOptions,
    /// Page lookup by slug.
    PageBySlug(String),
    /// Direct page lookup by id.
    PageById(u64),
}

pub struct ContentFetcher<'a> {
    client: &'a CmsClient,
}

impl<'a> ContentFetcher<'a> {
    pub fn new(client: &'a CmsClient) -> Self {
        Self { client }
    }

    /// Runs the strategies in declared order and returns the first record
    /// with at least one of `wanted` populated. Strategy failures are
    /// logged and skipped; `None` means every strategy failed or came back
    /// empty, and the caller falls back to its default record.
    pub async fn fetch_first(
        &self,
        strategies: &[FetchStrategy],
        wanted: &[&str],
    ) -> Option<RawContent> {
        for strategy in strategies {
            match self.try_strategy(strategy).await {
                Ok(raw) if raw.has_any(wanted) => {
                    debug!("content strategy {:?} matched", strategy);
                    return Some(raw);
                }
                Ok(_) => {
                    debug!("content strategy {:?} had none of the wanted fields", strategy);
                    continue;
                }
                Err(err) => {
                    warn!("content strategy {:?} failed: {}", strategy, err);
                    continue;
                }
            }
        }
        None
    }

    async fn try_strategy(&self, strategy: &FetchStrategy) -> Result<RawContent> {
        match strategy {
            FetchStrategy::AcfOptions => {
                let value = self.client.acf_options().await?;
                Ok(RawContent::from_options(&value))
            }
            FetchStrategy::PageBySlug(slug) => {
                let page = self.client.page_by_slug(slug).await?;
                Ok(RawContent::from_page(&page))
            }
            FetchStrategy::PageById(id) => {
                let page = self.client.page_by_id(*id).await?;
                Ok(RawContent::from_page(&page))
            }
        }
    }
}
