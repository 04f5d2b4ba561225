//! News search clients for the dashboard
//!
//! This crate provides:
//! - [`FeedSource`]: the text-search seam the aggregator is written against
//! - [`GoogleNewsClient`]: Google News RSS search, the production source

pub mod error;
pub mod feed;
pub mod google_news;

pub use error::NewsError;
pub use feed::FeedSource;
pub use google_news::{GoogleNewsClient, GoogleNewsConfig};
