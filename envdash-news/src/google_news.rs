//! Google News RSS client
//!
//! Fetches news from the Google News RSS search API using free-text queries.
//! Results are mapped one-to-one into [`NewsItem`]s in feed order.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use envdash_core::NewsItem;

use crate::error::NewsError;
use crate::feed::FeedSource;

/// Default Google News RSS search endpoint
pub const GOOGLE_NEWS_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// Attribution used when an entry carries neither snippet nor creator
const DEFAULT_SOURCE: &str = "Google News";

/// Locale parameters appended to every search
#[derive(Debug, Clone)]
pub struct GoogleNewsConfig {
    pub base_url: String,
    /// Interface language (`hl`)
    pub language: String,
    /// Region (`gl`)
    pub region: String,
    /// Edition id (`ceid`)
    pub edition: String,
}

impl Default for GoogleNewsConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_NEWS_SEARCH_URL.to_string(),
            language: "en-US".to_string(),
            region: "US".to_string(),
            edition: "US:en".to_string(),
        }
    }
}

/// Google News RSS client
pub struct GoogleNewsClient {
    client: Client,
    config: GoogleNewsConfig,
}

impl GoogleNewsClient {
    /// Create a new Google News client with the default US English locale
    pub fn new() -> Self {
        Self::with_config(GoogleNewsConfig::default())
    }

    /// Create with a custom endpoint or locale
    pub fn with_config(config: GoogleNewsConfig) -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0 (compatible; EnvDashboard/1.0)")
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// Build the feed URL for a query
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&hl={}&gl={}&ceid={}",
            self.config.base_url,
            urlencoding::encode(query),
            self.config.language,
            self.config.region,
            self.config.edition
        )
    }
}

impl Default for GoogleNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for GoogleNewsClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<NewsItem>, NewsError> {
        let url = self.search_url(query);

        debug!("Fetching Google News RSS: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NewsError::ApiError {
                status: response.status().as_u16(),
                message: format!("Google News returned status {}", response.status()),
            });
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let channel = rss::Channel::read_from(&content[..]).map_err(|e| {
            NewsError::ParseError(format!("Failed to parse Google News RSS: {}", e))
        })?;

        let items = parse_channel(&channel);

        debug!("Google News returned {} items for '{}'", items.len(), query);

        Ok(items)
    }
}

/// Map every channel entry into a NewsItem, keeping feed order.
/// Entries with neither guid nor link cannot be identified and are skipped.
fn parse_channel(channel: &rss::Channel) -> Vec<NewsItem> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            let link = item.link().filter(|l| !l.is_empty());
            let guid = item.guid().map(|g| g.value()).filter(|g| !g.is_empty());
            let id = guid.or(link)?.to_string();
            let url = link.unwrap_or_default().to_string();

            let snippet = item
                .content()
                .or_else(|| item.description())
                .map(strip_html)
                .filter(|s| !s.is_empty());

            let creator = item
                .dublin_core_ext()
                .and_then(|dc| dc.creators().first())
                .filter(|c| !c.is_empty())
                .cloned();

            Some(NewsItem {
                id,
                title: item.title().unwrap_or_default().to_string(),
                url,
                source: snippet
                    .or(creator)
                    .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
                time: item.pub_date().map(str::to_string),
            })
        })
        .collect()
}

/// Reduce an HTML fragment to its text, collapsing whitespace
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
