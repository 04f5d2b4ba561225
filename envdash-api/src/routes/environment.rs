//! Weather, air quality, facility and geocoding endpoints
//!
//! Thin passthroughs to Open-Meteo and Overpass.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use envdash_core::{DashboardError, Facility};
use serde::Deserialize;
use tracing::{error, warn};

use super::error_response;
use crate::AppState;

/// Query parameters carrying a point
#[derive(Debug, Default, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl LocationQuery {
    /// Both coordinates as sent, if neither is missing or empty
    fn raw(&self) -> Option<(&str, &str)> {
        let lat = self.lat.as_deref().filter(|v| !v.is_empty())?;
        let lng = self.lng.as_deref().filter(|v| !v.is_empty())?;
        Some((lat, lng))
    }

    /// Both coordinates as numbers
    fn parsed(&self) -> Option<(f64, f64)> {
        let (lat, lng) = self.raw()?;
        Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
    }
}

/// Query parameters for geocoding
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeQuery {
    pub city: Option<String>,
}

/// Create environment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/pollution", get(get_pollution))
        .route("/facilities", get(get_facilities))
        .route("/geocode", get(get_geocode))
}

/// GET /api/weather?lat=..&lng=.. - Current conditions and daily forecast
async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Response {
    let Some((lat, lng)) = params.raw() else {
        return error_response(StatusCode::BAD_REQUEST, "Missing lat/lng");
    };

    match state.open_meteo.weather(lat, lng).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Weather API error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch weather data")
        }
    }
}

/// GET /api/pollution?lat=..&lng=.. - Air quality and AQI outlook
async fn get_pollution(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Response {
    let Some((lat, lng)) = params.raw() else {
        return error_response(StatusCode::BAD_REQUEST, "Missing lat/lng");
    };

    match state.open_meteo.air_quality(lat, lng).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Pollution API error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch pollution data")
        }
    }
}

/// GET /api/facilities?lat=..&lng=.. - Nearby hospitals, clinics, pharmacies.
/// Degrades to an empty list on any failure.
async fn get_facilities(
    State(state): State<AppState>,
    params: Result<Query<LocationQuery>, QueryRejection>,
) -> Json<Vec<Facility>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let Some((lat, lng)) = params.parsed() else {
        warn!("Facilities requested without usable coordinates: {:?}", params);
        return Json(Vec::new());
    };

    match state.overpass.medical_facilities(lat, lng).await {
        Ok(facilities) => Json(facilities),
        Err(e) => {
            error!("Overpass API error: {}", e);
            Json(Vec::new())
        }
    }
}

/// GET /api/geocode?city=.. - Coordinates for a city name
async fn get_geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeQuery>,
) -> Response {
    let Some(city) = params.city.as_deref().filter(|c| !c.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing city name");
    };

    match state.open_meteo.geocode(city).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(DashboardError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "City not found"),
        Err(e) => {
            error!("Geocoding API error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch coordinates")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use super::LocationQuery;
    use crate::routes::test_support::{get_json, state_with_feed, TableFeed};

    fn state() -> crate::AppState {
        state_with_feed(Arc::new(TableFeed::default()))
    }

    #[test]
    fn test_location_query_parsing() {
        let query = LocationQuery {
            lat: Some("6.52".to_string()),
            lng: Some(" 3.37".to_string()),
        };
        assert_eq!(query.parsed(), Some((6.52, 3.37)));

        let query = LocationQuery {
            lat: Some("north".to_string()),
            lng: Some("3.37".to_string()),
        };
        assert_eq!(query.raw(), Some(("north", "3.37")));
        assert_eq!(query.parsed(), None);

        assert_eq!(LocationQuery::default().raw(), None);
    }

    #[tokio::test]
    async fn test_weather_requires_coordinates() {
        let (status, body) = get_json(state(), "/api/weather?lat=6.5").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing lat/lng" }));
    }

    #[tokio::test]
    async fn test_weather_upstream_failure() {
        let (status, body) = get_json(state(), "/api/weather?lat=6.5&lng=3.4").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch weather data" }));
    }

    #[tokio::test]
    async fn test_pollution_upstream_failure() {
        let (status, body) = get_json(state(), "/api/pollution?lat=6.5&lng=3.4").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch pollution data" }));
    }

    #[tokio::test]
    async fn test_facilities_degrade_to_empty() {
        let (status, body) = get_json(state(), "/api/facilities?lat=6.5&lng=3.4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = get_json(state(), "/api/facilities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_geocode_requires_city() {
        let (status, body) = get_json(state(), "/api/geocode").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing city name" }));
    }

    #[tokio::test]
    async fn test_geocode_upstream_failure() {
        let (status, body) = get_json(state(), "/api/geocode?city=Lagos").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch coordinates" }));
    }
}
