//! Core types for the Environmental Dashboard
//!
//! This crate defines the shared data structures used across the backend,
//! including news items, search queries, environmental reports and the
//! workspace-wide error type.

pub mod environment;
pub mod error;
pub mod news;
pub mod trade;

pub use environment::{
    Coordinates, DailyForecast, Facility, GeocodeResult, PollutantComponents, PollutionForecast,
    PollutionReport, WeatherReport,
};
pub use error::{DashboardError, DashboardResult};
pub use news::{NewsItem, NewsQuery, SearchScope};
pub use trade::{MarketIndex, TradeSnapshot, Trend};
