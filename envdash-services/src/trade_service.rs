//! Mock market data for the trade widget
//!
//! Values are fixed; only the change percentage and most trends are
//! re-rolled on every request.

use rand::Rng;

use envdash_core::{MarketIndex, TradeSnapshot, Trend};

/// How an index's trend is produced
#[derive(Debug, Clone, Copy)]
enum TrendKind {
    Random,
    AlwaysUp,
}

const INDICES: [(&str, &str, TrendKind); 5] = [
    ("S&P 500", "4,783.45", TrendKind::Random),
    ("NASDAQ", "15,628.90", TrendKind::Random),
    ("Global Trade Vol", "$28.5T", TrendKind::AlwaysUp),
    ("Crude Oil", "$76.40", TrendKind::Random),
    ("Gold", "$2,035.10", TrendKind::AlwaysUp),
];

/// Generator for randomly fluctuating index snapshots
#[derive(Debug, Clone, Default)]
pub struct TradeService;

impl TradeService {
    pub fn new() -> Self {
        Self
    }

    /// Fresh snapshot using the thread-local RNG
    pub fn snapshot(&self) -> TradeSnapshot {
        self.snapshot_with(&mut rand::rng())
    }

    pub fn snapshot_with<R: Rng>(&self, rng: &mut R) -> TradeSnapshot {
        let indices = INDICES
            .iter()
            .map(|(name, value, kind)| {
                let change = format!("{:.2}", rng.random::<f64>() * 2.0);
                let trend = match kind {
                    TrendKind::AlwaysUp => Trend::Up,
                    TrendKind::Random if rng.random::<f64>() > 0.5 => Trend::Up,
                    TrendKind::Random => Trend::Down,
                };

                MarketIndex {
                    name: name.to_string(),
                    value: value.to_string(),
                    change,
                    trend,
                }
            })
            .collect();

        TradeSnapshot { indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = TradeService::new().snapshot_with(&mut rng);

        let names: Vec<&str> = snapshot.indices.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["S&P 500", "NASDAQ", "Global Trade Vol", "Crude Oil", "Gold"]
        );
        assert_eq!(snapshot.indices[2].trend, Trend::Up);
        assert_eq!(snapshot.indices[4].trend, Trend::Up);
        assert_eq!(snapshot.indices[4].value, "$2,035.10");
    }

    #[test]
    fn test_change_is_two_decimals_below_two() {
        let mut rng = StdRng::seed_from_u64(42);
        let service = TradeService::new();

        for _ in 0..50 {
            for index in service.snapshot_with(&mut rng).indices {
                let (_, fraction) = index.change.split_once('.').unwrap();
                assert_eq!(fraction.len(), 2);
                let value: f64 = index.change.parse().unwrap();
                assert!((0.0..=2.0).contains(&value), "{} out of range", index.change);
            }
        }
    }

    #[test]
    fn test_snapshot_serializes_lowercase_trend() {
        let snapshot = TradeService::new().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        let trend = json["indices"][0]["trend"].as_str().unwrap();
        assert!(trend == "up" || trend == "down");
    }
}
