//! Server configuration from environment variables

use envdash_core::{DashboardError, DashboardResult};
use envdash_environment::open_meteo::OpenMeteoUrls;
use envdash_environment::overpass::OVERPASS_URL;
use envdash_news::GoogleNewsConfig;

const DEFAULT_PORT: u16 = 3001;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub news: GoogleNewsConfig,
    pub open_meteo: OpenMeteoUrls,
    pub overpass_url: String,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset or empty keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DashboardResult<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                DashboardError::config(format!("SERVER_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let mut news = GoogleNewsConfig::default();
        if let Some(url) = var("NEWS_FEED_BASE_URL") {
            news.base_url = url;
        }

        let mut open_meteo = OpenMeteoUrls::default();
        if let Some(url) = var("OPEN_METEO_FORECAST_URL") {
            open_meteo.forecast = url;
        }
        if let Some(url) = var("OPEN_METEO_AIR_QUALITY_URL") {
            open_meteo.air_quality = url;
        }
        if let Some(url) = var("OPEN_METEO_GEOCODING_URL") {
            open_meteo.geocoding = url;
        }

        Ok(Self {
            port,
            news,
            open_meteo,
            overpass_url: var("OVERPASS_URL").unwrap_or_else(|| OVERPASS_URL.to_string()),
        })
    }
}
