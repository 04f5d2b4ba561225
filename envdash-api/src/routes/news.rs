//! News endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use envdash_core::NewsQuery;
use tracing::error;

use super::error_response;
use crate::AppState;

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/news", get(get_news))
}

/// GET /api/news - Up to 5 articles for a topic, by location or globally.
/// Always an array on success; any request-level failure is a generic 500.
/// Repeated parameters are comma-joined rather than rejected.
async fn get_news(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query: NewsQuery = match params {
        Ok(Query(pairs)) => pairs.into_iter().collect(),
        Err(e) => {
            error!("News API error: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch news");
        }
    };

    let items = state.news_service.aggregate(&query).await;

    (StatusCode::OK, Json(items)).into_response()
}
