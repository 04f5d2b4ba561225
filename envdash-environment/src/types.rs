//! Upstream API response types
//!
//! These types mirror the Open-Meteo and Overpass responses and are
//! converted to envdash-core types for the UI.

use std::collections::HashMap;

use serde::Deserialize;

use envdash_core::{
    Coordinates, DailyForecast, Facility, GeocodeResult, PollutantComponents, PollutionForecast,
    PollutionReport, WeatherReport,
};

use crate::insight::{air_quality_insight, capitalize, main_pollutant, weather_description};

/// Number of days sampled from the hourly AQI series
const POLLUTION_FORECAST_DAYS: usize = 5;
/// Hour of day used as the daily AQI sample
const POLLUTION_SAMPLE_HOUR: usize = 12;

/// Response from GET /v1/forecast
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentWeather,
    pub daily: DailyWeather,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub is_day: Option<u8>,
    #[serde(default)]
    pub weather_code: Option<i32>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
}

/// Column-oriented daily series, all indexed like `time`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyWeather {
    pub time: Vec<String>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
}

fn at(series: &[Option<f64>], i: usize) -> Option<f64> {
    series.get(i).copied().flatten()
}

impl ForecastResponse {
    pub fn into_report(self) -> WeatherReport {
        let daily = &self.daily;

        let forecast = daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| DailyForecast {
                date: date.clone(),
                temp_max: at(&daily.temperature_2m_max, i),
                temp_min: at(&daily.temperature_2m_min, i),
                precipitation_prob: at(&daily.precipitation_probability_max, i),
                code: daily.weather_code.get(i).copied().flatten(),
            })
            .collect();

        WeatherReport {
            temp: self.current.temperature_2m,
            feels_like: self.current.apparent_temperature,
            humidity: self.current.relative_humidity_2m,
            wind_speed: self.current.wind_speed_10m,
            description: weather_description(self.current.weather_code).to_string(),
            uv_index: at(&daily.uv_index_max, 0),
            is_day: self.current.is_day,
            forecast,
        }
    }
}

/// Response from GET /v1/air-quality
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    pub current: CurrentAirQuality,
    pub hourly: HourlyAirQuality,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentAirQuality {
    #[serde(default)]
    pub us_aqi: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub carbon_monoxide: Option<f64>,
    #[serde(default)]
    pub nitrogen_dioxide: Option<f64>,
    #[serde(default)]
    pub sulphur_dioxide: Option<f64>,
    #[serde(default)]
    pub ozone: Option<f64>,
    #[serde(default)]
    pub ammonia: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyAirQuality {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub us_aqi: Vec<Option<f64>>,
}

impl HourlyAirQuality {
    /// Midday sample for each of the next days, skipping days the series
    /// does not reach
    pub fn daily_samples(&self) -> Vec<PollutionForecast> {
        (0..POLLUTION_FORECAST_DAYS)
            .map(|day| POLLUTION_SAMPLE_HOUR + day * 24)
            .filter(|&index| index < self.us_aqi.len())
            .filter_map(|index| {
                let time = self.time.get(index).filter(|t| !t.is_empty())?;
                Some(PollutionForecast {
                    date: time.split('T').next().unwrap_or_default().to_string(),
                    aqi_max: self.us_aqi[index],
                })
            })
            .collect()
    }
}

impl AirQualityResponse {
    pub fn into_report(self) -> PollutionReport {
        let current = &self.current;

        PollutionReport {
            aqi: current.us_aqi,
            main_pollutant: main_pollutant(current.pm2_5, current.pm10, current.ozone).to_string(),
            components: PollutantComponents {
                co: current.carbon_monoxide,
                no2: current.nitrogen_dioxide,
                o3: current.ozone,
                so2: current.sulphur_dioxide,
                pm2_5: current.pm2_5,
                pm10: current.pm10,
                nh3: current.ammonia,
            },
            forecast: self.hourly.daily_samples(),
            insight: air_quality_insight(current.us_aqi).to_string(),
        }
    }
}

/// Response from GET /v1/search (geocoding)
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingPlace>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingPlace {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodingResponse {
    /// Best match, if any
    pub fn into_first(self) -> Option<GeocodeResult> {
        self.results?.into_iter().next().map(|place| GeocodeResult {
            name: place.name,
            country: place.country,
            state: place.admin1,
            lat: place.latitude,
            lng: place.longitude,
        })
    }
}

/// Response from the Overpass interpreter with `[out:json]`
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OverpassElement {
    pub fn to_facility(&self) -> Facility {
        let tag = |key: &str| self.tags.get(key).filter(|v| !v.is_empty());

        Facility {
            id: self.id,
            name: tag("name")
                .cloned()
                .unwrap_or_else(|| "Unknown Facility".to_string()),
            kind: tag("amenity")
                .map(|a| capitalize(a))
                .unwrap_or_else(|| "Health".to_string()),
            address: tag("addr:street")
                .cloned()
                .unwrap_or_else(|| "Address not available".to_string()),
            distance: "Nearby".to_string(),
            coords: Coordinates {
                lat: self.lat,
                lng: self.lon,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_into_report() {
        let raw = r#"{
            "current": {
                "temperature_2m": 28.4,
                "relative_humidity_2m": 74,
                "apparent_temperature": 32.1,
                "is_day": 1,
                "precipitation": 0.0,
                "rain": 0.0,
                "weather_code": 3,
                "wind_speed_10m": 11.2
            },
            "daily": {
                "time": ["2026-10-19", "2026-10-20"],
                "weather_code": [3, 95],
                "temperature_2m_max": [30.1, 29.4],
                "temperature_2m_min": [24.0, 23.8],
                "precipitation_probability_max": [40, null],
                "uv_index_max": [7.5, 6.0]
            }
        }"#;

        let report = serde_json::from_str::<ForecastResponse>(raw)
            .unwrap()
            .into_report();

        assert_eq!(report.temp, Some(28.4));
        assert_eq!(report.description, "Partly Cloudy");
        assert_eq!(report.uv_index, Some(7.5));
        assert_eq!(report.is_day, Some(1));
        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[1].code, Some(95));
        assert_eq!(report.forecast[1].precipitation_prob, None);
    }

    #[test]
    fn test_daily_samples_take_midday_values() {
        let time: Vec<String> = (0..72)
            .map(|h| format!("2026-10-{:02}T{:02}:00", 19 + h / 24, h % 24))
            .collect();
        let us_aqi: Vec<Option<f64>> = (0..72).map(|h| Some(h as f64)).collect();

        let samples = HourlyAirQuality { time, us_aqi }.daily_samples();

        assert_eq!(
            samples,
            vec![
                PollutionForecast { date: "2026-10-19".to_string(), aqi_max: Some(12.0) },
                PollutionForecast { date: "2026-10-20".to_string(), aqi_max: Some(36.0) },
                PollutionForecast { date: "2026-10-21".to_string(), aqi_max: Some(60.0) },
            ]
        );
    }

    #[test]
    fn test_geocoding_without_results() {
        let response: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn test_overpass_element_defaults() {
        let element: OverpassElement = serde_json::from_str(
            r#"{"type": "node", "id": 42, "lat": 6.45, "lon": 3.39, "tags": {"amenity": "clinic"}}"#,
        )
        .unwrap();

        let facility = element.to_facility();
        assert_eq!(facility.name, "Unknown Facility");
        assert_eq!(facility.kind, "Clinic");
        assert_eq!(facility.address, "Address not available");
        assert_eq!(facility.coords, Coordinates { lat: 6.45, lng: 3.39 });
    }
}
