//! News data structures for location-aware news aggregation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article discovered through a feed search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Feed guid if present, otherwise the article URL
    pub id: String,
    /// Article title (also the deduplication key)
    pub title: String,
    /// Article URL
    pub url: String,
    /// Attribution or snippet, best effort
    pub source: String,
    /// Publication date as reported by the feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Search strategy selected by a [`NewsQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    /// Single topic/category query, no location escalation
    Global,
    /// City, then state, then country
    Hierarchical,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::Global => "global",
            SearchScope::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied search intent, as received on `/api/news`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsQuery {
    /// Free-text subject (e.g. "Weather", "Pollution")
    pub topic: Option<String>,
    /// `"global"` selects the global strategy; anything else is hierarchical
    pub scope: Option<String>,
    /// Override label, only consulted in global scope
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl NewsQuery {
    /// Create a hierarchical query for a topic
    pub fn topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    /// Create a global query
    pub fn global() -> Self {
        Self {
            scope: Some(SearchScope::Global.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The strategy for this query; only an exact `"global"` selects global scope
    pub fn scope(&self) -> SearchScope {
        match self.scope.as_deref() {
            Some("global") => SearchScope::Global,
            _ => SearchScope::Hierarchical,
        }
    }

    /// Category, ignoring empty values
    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn city(&self) -> Option<&str> {
        present(&self.city)
    }

    pub fn state(&self) -> Option<&str> {
        present(&self.state)
    }

    pub fn country(&self) -> Option<&str> {
        present(&self.country)
    }
}

/// Build from raw query pairs. Unknown keys are ignored and a repeated key
/// keeps every value, comma-joined in arrival order.
impl FromIterator<(String, String)> for NewsQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "topic" => &mut query.topic,
                "scope" => &mut query.scope,
                "category" => &mut query.category,
                "city" => &mut query.city,
                "state" => &mut query.state,
                "country" => &mut query.country,
                _ => continue,
            };

            *slot = Some(match slot.take() {
                Some(existing) => format!("{},{}", existing, value),
                None => value,
            });
        }

        query
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
