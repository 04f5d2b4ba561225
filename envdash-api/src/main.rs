//! Environmental Dashboard API Server
//!
//! Stateless proxy that reshapes weather, air quality, facility, geocoding
//! and news data from public APIs into the dashboard's JSON contracts.

mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use envdash_environment::{OpenMeteoClient, OverpassClient};
use envdash_news::{FeedSource, GoogleNewsClient};
use envdash_services::{NewsService, TradeService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    pub open_meteo: Arc<OpenMeteoClient>,
    pub overpass: Arc<OverpassClient>,
    pub trade_service: Arc<TradeService>,
}

impl AppState {
    pub fn new(
        feed: Arc<dyn FeedSource>,
        open_meteo: OpenMeteoClient,
        overpass: OverpassClient,
    ) -> Self {
        Self {
            news_service: Arc::new(NewsService::new(feed)),
            open_meteo: Arc::new(open_meteo),
            overpass: Arc::new(overpass),
            trade_service: Arc::new(TradeService::new()),
        }
    }
}

/// Build the HTTP application
pub fn app(state: AppState) -> Router {
    // The UI is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,envdash_api=debug")),
        )
        .init();

    info!("Starting Environmental Dashboard API");

    let config = ServerConfig::from_env()?;

    let state = AppState::new(
        Arc::new(GoogleNewsClient::with_config(config.news.clone())),
        OpenMeteoClient::with_urls(config.open_meteo.clone()),
        OverpassClient::with_base_url(&config.overpass_url),
    );
    info!("News feed: {}", config.news.base_url);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
