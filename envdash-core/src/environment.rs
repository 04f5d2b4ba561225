//! Environmental data structures served by the dashboard
//!
//! These are the simplified contracts returned to the UI, not the raw
//! upstream payloads.

use serde::{Deserialize, Serialize};

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Current conditions plus daily forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Human-readable label derived from the WMO weather code
    pub description: String,
    /// Today's maximum UV index
    pub uv_index: Option<f64>,
    /// 1 during daylight, 0 at night
    pub is_day: Option<u8>,
    pub forecast: Vec<DailyForecast>,
}

/// One day of the weather forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub precipitation_prob: Option<f64>,
    /// WMO weather code
    pub code: Option<i32>,
}

/// Air quality report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollutionReport {
    /// US AQI
    pub aqi: Option<f64>,
    #[serde(rename = "mainPollutant")]
    pub main_pollutant: String,
    pub components: PollutantComponents,
    pub forecast: Vec<PollutionForecast>,
    /// Health advice for the current AQI
    pub insight: String,
}

/// Concentrations of individual pollutants (μg/m³)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollutantComponents {
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub o3: Option<f64>,
    pub so2: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub nh3: Option<f64>,
}

/// Midday AQI sample for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionForecast {
    pub date: String,
    pub aqi_max: Option<f64>,
}

/// A nearby medical facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// OpenStreetMap node id
    pub id: i64,
    pub name: String,
    /// "Hospital", "Clinic", "Pharmacy" or "Health"
    #[serde(rename = "type")]
    pub kind: String,
    pub address: String,
    pub distance: String,
    pub coords: Coordinates,
}

/// Resolved location for a city name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// First-level administrative area
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lng: f64,
}
