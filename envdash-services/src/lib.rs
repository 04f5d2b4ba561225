//! Business logic services for the Environmental Dashboard
//!
//! This crate provides the service layer between the HTTP routes and the
//! upstream clients.

pub mod news_service;
pub mod trade_service;

pub use news_service::{NewsService, LOCAL_COVERAGE_THRESHOLD, MAX_NEWS_ITEMS};
pub use trade_service::TradeService;
