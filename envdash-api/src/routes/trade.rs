//! Mock market data endpoint

use axum::{extract::State, routing::get, Json, Router};
use envdash_core::TradeSnapshot;

use crate::AppState;

/// Create trade routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/trade", get(get_trade))
}

/// GET /api/trade - Randomly fluctuating index snapshot
async fn get_trade(State(state): State<AppState>) -> Json<TradeSnapshot> {
    Json(state.trade_service.snapshot())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::routes::test_support::{get_json, state_with_feed, TableFeed};

    #[tokio::test]
    async fn test_trade_snapshot() {
        let state = state_with_feed(Arc::new(TableFeed::default()));

        let (status, body) = get_json(state, "/api/trade").await;

        assert_eq!(status, StatusCode::OK);
        let indices = body["indices"].as_array().unwrap();
        assert_eq!(indices.len(), 5);
        assert_eq!(indices[0]["name"], "S&P 500");
        assert_eq!(indices[2]["trend"], "up");
    }
}
