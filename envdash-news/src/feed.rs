//! Feed source abstraction

use async_trait::async_trait;
use tracing::warn;

use envdash_core::NewsItem;

use crate::error::NewsError;

/// A news feed that can be searched with free text
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Run one text query, preserving the feed's own ordering
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>, NewsError>;

    /// Run one text query; failures are logged and yield no items
    async fn fetch(&self, query: &str) -> Vec<NewsItem> {
        match self.search(query).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to fetch news for query '{}': {}", query, e);
                Vec::new()
            }
        }
    }
}
