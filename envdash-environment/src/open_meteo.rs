//! Open-Meteo API client
//!
//! Provides weather forecast, air quality and geocoding lookups against the
//! free Open-Meteo endpoints. No API key is required.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use envdash_core::{DashboardError, DashboardResult, GeocodeResult, PollutionReport, WeatherReport};

use crate::types::{AirQualityResponse, ForecastResponse, GeocodingResponse};

/// Base URLs for Open-Meteo
pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const OPEN_METEO_AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
pub const OPEN_METEO_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const CURRENT_WEATHER_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,precipitation,rain,weather_code,wind_speed_10m";
const DAILY_WEATHER_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max,uv_index_max";
const CURRENT_AIR_QUALITY_FIELDS: &str = "us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone,ammonia";

/// Endpoint set, overridable for self-hosted instances
#[derive(Debug, Clone)]
pub struct OpenMeteoUrls {
    pub forecast: String,
    pub air_quality: String,
    pub geocoding: String,
}

impl Default for OpenMeteoUrls {
    fn default() -> Self {
        Self {
            forecast: OPEN_METEO_FORECAST_URL.to_string(),
            air_quality: OPEN_METEO_AIR_QUALITY_URL.to_string(),
            geocoding: OPEN_METEO_GEOCODING_URL.to_string(),
        }
    }
}

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    urls: OpenMeteoUrls,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self::with_urls(OpenMeteoUrls::default())
    }

    pub fn with_urls(urls: OpenMeteoUrls) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, urls }
    }

    /// Current conditions and 7-day forecast.
    /// Coordinates are forwarded verbatim; Open-Meteo validates them.
    #[instrument(skip(self))]
    pub async fn weather(&self, lat: &str, lng: &str) -> DashboardResult<WeatherReport> {
        let response: ForecastResponse = self
            .get_json(
                &self.urls.forecast,
                &[
                    ("latitude", lat),
                    ("longitude", lng),
                    ("current", CURRENT_WEATHER_FIELDS),
                    ("daily", DAILY_WEATHER_FIELDS),
                    ("timezone", "auto"),
                ],
            )
            .await?;

        Ok(response.into_report())
    }

    /// Current pollutant levels and a 5-day AQI outlook.
    /// The hourly series is sampled because daily AQI aggregates are not
    /// reliably available.
    #[instrument(skip(self))]
    pub async fn air_quality(&self, lat: &str, lng: &str) -> DashboardResult<PollutionReport> {
        let response: AirQualityResponse = self
            .get_json(
                &self.urls.air_quality,
                &[
                    ("latitude", lat),
                    ("longitude", lng),
                    ("current", CURRENT_AIR_QUALITY_FIELDS),
                    ("hourly", "us_aqi"),
                    ("timezone", "auto"),
                ],
            )
            .await?;

        Ok(response.into_report())
    }

    /// Resolve a city name to coordinates
    #[instrument(skip(self))]
    pub async fn geocode(&self, city: &str) -> DashboardResult<GeocodeResult> {
        let response: GeocodingResponse = self
            .get_json(
                &self.urls.geocoding,
                &[
                    ("name", city),
                    ("count", "1"),
                    ("language", "en"),
                    ("format", "json"),
                ],
            )
            .await?;

        response
            .into_first()
            .ok_or_else(|| DashboardError::not_found(format!("City not found: {}", city)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> DashboardResult<T> {
        debug!("Fetching Open-Meteo: {}", url);

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| DashboardError::network(format!("Open-Meteo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(format!(
                "Open-Meteo API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::parse(format!("Failed to parse Open-Meteo response: {}", e)))
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}
