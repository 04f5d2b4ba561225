//! Overpass (OpenStreetMap) client for nearby medical facilities

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use envdash_core::{DashboardError, DashboardResult, Facility};

use crate::types::OverpassResponse;

pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Half-width of the search box in degrees (roughly 4-5 km)
const SEARCH_RADIUS_DEG: f64 = 0.04;
/// Amenity tags treated as medical facilities
const MEDICAL_AMENITIES: [&str; 3] = ["hospital", "clinic", "pharmacy"];
const MAX_RESULTS: usize = 10;

/// Overpass API client
#[derive(Clone)]
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

impl OverpassClient {
    pub fn new() -> Self {
        Self::with_base_url(OVERPASS_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Hospitals, clinics and pharmacies around a point
    #[instrument(skip(self))]
    pub async fn medical_facilities(&self, lat: f64, lng: f64) -> DashboardResult<Vec<Facility>> {
        let query = facility_query(lat, lng);

        debug!("Querying Overpass for facilities near {},{}", lat, lng);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| DashboardError::network(format!("Overpass request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(format!(
                "Overpass API error ({}): {}",
                status, body
            )));
        }

        let parsed: OverpassResponse = response
            .json()
            .await
            .map_err(|e| DashboardError::parse(format!("Failed to parse Overpass response: {}", e)))?;

        Ok(parsed.elements.iter().map(|e| e.to_facility()).collect())
    }
}

impl Default for OverpassClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Overpass QL selecting medical amenity nodes in a box around the point
fn facility_query(lat: f64, lng: f64) -> String {
    let bbox = format!(
        "({},{},{},{})",
        lat - SEARCH_RADIUS_DEG,
        lng - SEARCH_RADIUS_DEG,
        lat + SEARCH_RADIUS_DEG,
        lng + SEARCH_RADIUS_DEG
    );

    let nodes: String = MEDICAL_AMENITIES
        .iter()
        .map(|amenity| format!("node[\"amenity\"=\"{}\"]{};", amenity, bbox))
        .collect();

    format!("[out:json];({});out center {};", nodes, MAX_RESULTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_query_covers_all_amenities() {
        let query = facility_query(10.0, 20.0);

        assert!(query.starts_with("[out:json];("));
        assert!(query.ends_with(");out center 10;"));
        assert_eq!(query.matches("node[").count(), 3);
        for amenity in MEDICAL_AMENITIES {
            assert!(query.contains(&format!("node[\"amenity\"=\"{}\"](", amenity)));
        }
    }
}
