//! Market index snapshot shown in the trade widget

use serde::{Deserialize, Serialize};

/// Direction of the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A single market index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndex {
    pub name: String,
    /// Display value, already formatted (e.g. "$76.40")
    pub value: String,
    /// Percentage change with two decimals
    pub change: String,
    pub trend: Trend,
}

/// Response body of the trade endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSnapshot {
    pub indices: Vec<MarketIndex>,
}
