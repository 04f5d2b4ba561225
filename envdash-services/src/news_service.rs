//! News Service
//!
//! Aggregates location-aware news for the dashboard. Two strategies:
//!
//! - **Global**: one category/topic search, returned in feed order.
//! - **Hierarchical**: city first, widening to state and then country while
//!   fewer than [`LOCAL_COVERAGE_THRESHOLD`] articles have been collected.
//!   Later steps only add articles whose title has not been seen yet.
//!
//! The result is always capped at [`MAX_NEWS_ITEMS`] and never reordered.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use envdash_core::{NewsItem, NewsQuery, SearchScope};
use envdash_news::FeedSource;

/// Below this many articles the search widens to the next location level
pub const LOCAL_COVERAGE_THRESHOLD: usize = 3;

/// Maximum articles returned per request
pub const MAX_NEWS_ITEMS: usize = 5;

/// Topic used by global searches without a topic
const DEFAULT_GLOBAL_TOPIC: &str = "World";

/// Rendering of an absent topic in location searches. Callers are expected
/// to always send a topic; existing clients rely on this exact text.
const MISSING_TOPIC: &str = "undefined";

/// News service for location-aware news
pub struct NewsService {
    source: Arc<dyn FeedSource>,
}

impl NewsService {
    /// Create a new NewsService over a feed source
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        info!("Initializing NewsService");
        Self { source }
    }

    /// Collect up to [`MAX_NEWS_ITEMS`] articles for a query.
    /// Feed failures only empty their own step, so this never fails.
    #[instrument(skip(self))]
    pub async fn aggregate(&self, query: &NewsQuery) -> Vec<NewsItem> {
        let scope = query.scope();

        let mut items = match scope {
            SearchScope::Global => self.search_global(query).await,
            SearchScope::Hierarchical => self.search_hierarchical(query).await,
        };

        items.truncate(MAX_NEWS_ITEMS);

        info!("Aggregated {} news items ({} scope)", items.len(), scope);

        items
    }

    async fn search_global(&self, query: &NewsQuery) -> Vec<NewsItem> {
        let search = global_search_string(query);
        debug!("Global news search: '{}'", search);
        self.source.fetch(&search).await
    }

    async fn search_hierarchical(&self, query: &NewsQuery) -> Vec<NewsItem> {
        let topic = query.topic.as_deref();
        let mut items: Vec<NewsItem> = Vec::new();

        if let Some(city) = query.city() {
            let search = local_search_string(topic, city);
            debug!("City news search: '{}'", search);
            items.extend(self.source.fetch(&search).await);
        }

        for place in [query.state(), query.country()].into_iter().flatten() {
            if items.len() >= LOCAL_COVERAGE_THRESHOLD {
                break;
            }

            let search = local_search_string(topic, place);
            let found = self.source.fetch(&search).await;
            let added = merge_unique(&mut items, found);
            debug!("Widened news search: '{}' added {} items", search, added);
        }

        items
    }
}

fn global_search_string(query: &NewsQuery) -> String {
    match query.category() {
        Some(category) => format!("{} News", category),
        None => {
            let topic = query
                .topic
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_GLOBAL_TOPIC);
            format!("Global {} News", topic)
        }
    }
}

fn local_search_string(topic: Option<&str>, place: &str) -> String {
    format!("{} in {}", topic.unwrap_or(MISSING_TOPIC), place)
}

/// Append every incoming item whose title is not already present
/// (exact, case-sensitive). Returns how many were appended.
fn merge_unique(items: &mut Vec<NewsItem>, incoming: Vec<NewsItem>) -> usize {
    let before = items.len();

    for item in incoming {
        if !items.iter().any(|existing| existing.title == item.title) {
            items.push(item);
        }
    }

    items.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use envdash_news::NewsError;

    /// Feed that answers from a fixed table and records every search
    #[derive(Default)]
    struct StubFeed {
        responses: HashMap<String, Result<Vec<NewsItem>, u16>>,
        searches: Mutex<Vec<String>>,
    }

    impl StubFeed {
        fn with(mut self, query: &str, titles: &[&str]) -> Self {
            let items = titles
                .iter()
                .enumerate()
                .map(|(i, title)| item(&format!("{}#{}", query, i), title))
                .collect();
            self.responses.insert(query.to_string(), Ok(items));
            self
        }

        fn failing(mut self, query: &str) -> Self {
            self.responses.insert(query.to_string(), Err(503));
            self
        }

        fn searches(&self) -> Vec<String> {
            self.searches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FeedSource for StubFeed {
        async fn search(&self, query: &str) -> Result<Vec<NewsItem>, NewsError> {
            self.searches.lock().unwrap().push(query.to_string());
            match self.responses.get(query) {
                Some(Ok(items)) => Ok(items.clone()),
                Some(Err(status)) => Err(NewsError::ApiError {
                    status: *status,
                    message: "upstream unavailable".to_string(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn item(id: &str, title: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://news.example/{}", id),
            source: "Google News".to_string(),
            time: None,
        }
    }

    fn titles(items: &[NewsItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    async fn run(feed: StubFeed, query: NewsQuery) -> (Vec<NewsItem>, Vec<String>) {
        let feed = Arc::new(feed);
        let service = NewsService::new(feed.clone());
        let items = service.aggregate(&query).await;
        (items, feed.searches())
    }

    #[tokio::test]
    async fn test_global_category_single_fetch_in_feed_order() {
        let feed = StubFeed::default().with(
            "Geopolitics News",
            &["g1", "g2", "g3", "g4", "g5", "g6", "g7"],
        );
        let query = NewsQuery::global().with_category("Geopolitics").with_city("Lagos");

        let (items, searches) = run(feed, query).await;

        assert_eq!(searches, vec!["Geopolitics News"]);
        assert_eq!(titles(&items), vec!["g1", "g2", "g3", "g4", "g5"]);
    }

    #[tokio::test]
    async fn test_global_topic_and_default() {
        let (_, searches) = run(StubFeed::default(), NewsQuery {
            topic: Some("Sport".to_string()),
            ..NewsQuery::global()
        })
        .await;
        assert_eq!(searches, vec!["Global Sport News"]);

        let (_, searches) = run(StubFeed::default(), NewsQuery::global()).await;
        assert_eq!(searches, vec!["Global World News"]);

        let (_, searches) = run(StubFeed::default(), NewsQuery {
            topic: Some(String::new()),
            category: Some(String::new()),
            ..NewsQuery::global()
        })
        .await;
        assert_eq!(searches, vec!["Global World News"]);
    }

    #[tokio::test]
    async fn test_global_keeps_duplicate_titles() {
        let feed = StubFeed::default().with("Business News", &["same", "same", "other"]);

        let (items, _) = run(feed, NewsQuery::global().with_category("Business")).await;

        assert_eq!(titles(&items), vec!["same", "same", "other"]);
    }

    #[tokio::test]
    async fn test_city_coverage_skips_wider_searches() {
        let feed = StubFeed::default()
            .with("Weather in Lagos", &["a", "b", "c", "d"])
            .with("Weather in Lagos State", &["s"])
            .with("Weather in Nigeria", &["n"]);
        let query = NewsQuery::topic("Weather")
            .with_city("Lagos")
            .with_state("Lagos State")
            .with_country("Nigeria");

        let (items, searches) = run(feed, query).await;

        assert_eq!(searches, vec!["Weather in Lagos"]);
        assert_eq!(titles(&items), vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_state_results_deduplicated_against_city() {
        let feed = StubFeed::default()
            .with("Pollution in Reno", &["smoke advisory"])
            .with(
                "Pollution in Nevada",
                &["ozone rises", "smoke advisory", "dust storm", "new monitors", "lake haze"],
            );
        let query = NewsQuery::topic("Pollution")
            .with_city("Reno")
            .with_state("Nevada")
            .with_country("USA");

        let (items, searches) = run(feed, query).await;

        assert_eq!(searches, vec!["Pollution in Reno", "Pollution in Nevada"]);
        assert_eq!(
            titles(&items),
            vec!["smoke advisory", "ozone rises", "dust storm", "new monitors", "lake haze"]
        );
        assert_eq!(items[0].id, "Pollution in Reno#0");
    }

    #[tokio::test]
    async fn test_step_can_overshoot_then_truncates() {
        let feed = StubFeed::default()
            .with("Weather in Reno", &["c1", "c2"])
            .with("Weather in Nevada", &["s1", "s2", "s3", "s4"]);
        let query = NewsQuery::topic("Weather")
            .with_city("Reno")
            .with_state("Nevada")
            .with_country("USA");

        let (items, searches) = run(feed, query).await;

        assert_eq!(searches, vec!["Weather in Reno", "Weather in Nevada"]);
        assert_eq!(titles(&items), vec!["c1", "c2", "s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn test_country_deduplicated_against_city_and_state() {
        let feed = StubFeed::default()
            .with("Weather in Reno", &["one"])
            .with("Weather in Nevada", &["two"])
            .with("Weather in USA", &["one", "two", "three", "three", "Three"]);
        let query = NewsQuery::topic("Weather")
            .with_city("Reno")
            .with_state("Nevada")
            .with_country("USA");

        let (items, searches) = run(feed, query).await;

        assert_eq!(
            searches,
            vec!["Weather in Reno", "Weather in Nevada", "Weather in USA"]
        );
        assert_eq!(titles(&items), vec!["one", "two", "three", "Three"]);
    }

    #[tokio::test]
    async fn test_city_results_are_not_deduplicated() {
        let feed = StubFeed::default().with("Weather in Lagos", &["dup", "dup"]);

        let (items, _) = run(feed, NewsQuery::topic("Weather").with_city("Lagos")).await;

        assert_eq!(titles(&items), vec!["dup", "dup"]);
    }

    #[tokio::test]
    async fn test_city_failure_does_not_cascade() {
        let feed = StubFeed::default()
            .failing("Weather in Reno")
            .with("Weather in Nevada", &["state story"])
            .with("Weather in USA", &["country story"]);
        let query = NewsQuery::topic("Weather")
            .with_city("Reno")
            .with_state("Nevada")
            .with_country("USA");

        let (items, searches) = run(feed, query).await;

        assert_eq!(searches.len(), 3);
        assert_eq!(titles(&items), vec!["state story", "country story"]);
    }

    #[tokio::test]
    async fn test_state_only_query() {
        let feed = StubFeed::default().with("Weather in Nevada", &["s1"]);

        let (items, searches) = run(feed, NewsQuery::topic("Weather").with_state("Nevada")).await;

        assert_eq!(searches, vec!["Weather in Nevada"]);
        assert_eq!(titles(&items), vec!["s1"]);
    }

    #[tokio::test]
    async fn test_no_location_yields_nothing() {
        let (items, searches) = run(StubFeed::default(), NewsQuery::default()).await;

        assert!(items.is_empty());
        assert!(searches.is_empty());
    }

    #[tokio::test]
    async fn test_empty_city_is_skipped() {
        let query = NewsQuery::topic("Weather").with_city("").with_country("Kenya");

        let (_, searches) = run(StubFeed::default(), query).await;

        assert_eq!(searches, vec!["Weather in Kenya"]);
    }

    #[tokio::test]
    async fn test_missing_topic_is_rendered_verbatim() {
        let query = NewsQuery::default().with_city("Reno");

        let (_, searches) = run(StubFeed::default(), query).await;

        assert_eq!(searches, vec!["undefined in Reno"]);
    }

    #[test]
    fn test_merge_unique_is_idempotent() {
        let mut items = vec![item("1", "alpha"), item("2", "beta")];
        let repeat = items.clone();

        assert_eq!(merge_unique(&mut items, repeat), 0);
        assert_eq!(items.len(), 2);
    }
}
