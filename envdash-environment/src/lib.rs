//! Environmental data integration for the dashboard
//!
//! Thin clients for the public upstream APIs:
//! - Open-Meteo: weather forecast, air quality and geocoding
//! - Overpass: OpenStreetMap medical facilities around a point

pub mod insight;
pub mod open_meteo;
pub mod overpass;
pub mod types;

pub use open_meteo::{OpenMeteoClient, OpenMeteoUrls};
pub use overpass::OverpassClient;
