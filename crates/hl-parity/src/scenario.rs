//! Info-call scenarios and their comparison rules

use json_shape::CompareOptions;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const DAY_MS: u64 = 86_400_000;

/// One info call exercised against both backends.
///
/// Each scenario knows the payload it sends (parameterized by the per-chain
/// user identifier) and which comparison rules fit its response shape. Only
/// `allMids` returns a ticker-keyed lookup table; everything else is a
/// fixed-schema record or an array of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scenario {
    /// Mid prices for every market, keyed by ticker
    AllMids,
    /// Order book snapshot for one symbol
    L2Book { coin: String },
    /// Margin and position state for the test account
    ClearinghouseState,
    /// Open orders for the test account
    OpenOrders,
    /// Order history for the test account
    HistoricalOrders,
    /// Recent fills for the test account
    UserFills,
    /// Fills for the test account from a start time onward
    UserFillsByTime { start_time: u64 },
    /// Exchange metadata (asset universe)
    Meta,
    /// Exchange metadata with per-asset market context
    MetaAndAssetCtxs,
    /// Funding payments charged to the test account
    UserFunding,
    /// Portfolio value history for the test account
    Portfolio,
    /// Funding-rate history for one symbol
    FundingHistory { coin: String, start_time: u64 },
    /// Candle history for one symbol over a closed interval
    CandleSnapshot {
        coin: String,
        interval: String,
        start_time: u64,
        end_time: u64,
    },
}

impl Scenario {
    /// Scenario name, matching the payload `type` discriminator.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::AllMids => "allMids",
            Scenario::L2Book { .. } => "l2Book",
            Scenario::ClearinghouseState => "clearinghouseState",
            Scenario::OpenOrders => "openOrders",
            Scenario::HistoricalOrders => "historicalOrders",
            Scenario::UserFills => "userFills",
            Scenario::UserFillsByTime { .. } => "userFillsByTime",
            Scenario::Meta => "meta",
            Scenario::MetaAndAssetCtxs => "metaAndAssetCtxs",
            Scenario::UserFunding => "userFunding",
            Scenario::Portfolio => "portfolio",
            Scenario::FundingHistory { .. } => "fundingHistory",
            Scenario::CandleSnapshot { .. } => "candleSnapshot",
        }
    }

    /// Look up a scenario by name, with default symbols and time windows.
    pub fn from_name(name: &str) -> Option<Self> {
        let now = now_ms();
        match name {
            "allMids" => Some(Scenario::AllMids),
            "l2Book" => Some(Scenario::L2Book {
                coin: "BTC".to_string(),
            }),
            "clearinghouseState" => Some(Scenario::ClearinghouseState),
            "openOrders" => Some(Scenario::OpenOrders),
            "historicalOrders" => Some(Scenario::HistoricalOrders),
            "userFills" => Some(Scenario::UserFills),
            "userFillsByTime" => Some(Scenario::UserFillsByTime {
                start_time: window_start(now),
            }),
            "meta" => Some(Scenario::Meta),
            "metaAndAssetCtxs" => Some(Scenario::MetaAndAssetCtxs),
            "userFunding" => Some(Scenario::UserFunding),
            "portfolio" => Some(Scenario::Portfolio),
            "fundingHistory" => Some(Scenario::FundingHistory {
                coin: "BTC".to_string(),
                start_time: window_start(now),
            }),
            "candleSnapshot" => Some(Scenario::CandleSnapshot {
                coin: "BTC".to_string(),
                interval: "1m".to_string(),
                start_time: window_start(now),
                end_time: now,
            }),
            _ => None,
        }
    }

    /// The three scenarios run when none are named on the command line.
    pub fn canonical() -> Vec<Self> {
        vec![
            Scenario::AllMids,
            Scenario::L2Book {
                coin: "BTC".to_string(),
            },
            Scenario::ClearinghouseState,
        ]
    }

    /// Every known scenario, with default parameters.
    pub fn all() -> Vec<Self> {
        [
            "allMids",
            "l2Book",
            "clearinghouseState",
            "openOrders",
            "historicalOrders",
            "userFills",
            "userFillsByTime",
            "meta",
            "metaAndAssetCtxs",
            "userFunding",
            "portfolio",
            "fundingHistory",
            "candleSnapshot",
        ]
        .iter()
        .filter_map(|name| Self::from_name(name))
        .collect()
    }

    /// Request body for one backend. `user` is that backend's test account.
    pub fn payload(&self, user: &str) -> Value {
        match self {
            Scenario::AllMids => json!({"type": "allMids"}),
            Scenario::L2Book { coin } => json!({"type": "l2Book", "coin": coin}),
            Scenario::ClearinghouseState => {
                json!({"type": "clearinghouseState", "user": user})
            }
            Scenario::OpenOrders => json!({"type": "openOrders", "user": user}),
            Scenario::HistoricalOrders => json!({"type": "historicalOrders", "user": user}),
            Scenario::UserFills => {
                json!({"type": "userFills", "user": user, "aggregateByTime": false})
            }
            Scenario::UserFillsByTime { start_time } => json!({
                "type": "userFillsByTime",
                "user": user,
                "startTime": start_time,
                "aggregateByTime": true,
            }),
            Scenario::Meta => json!({"type": "meta"}),
            Scenario::MetaAndAssetCtxs => json!({"type": "metaAndAssetCtxs"}),
            Scenario::UserFunding => json!({"type": "userFunding", "user": user}),
            Scenario::Portfolio => json!({"type": "portfolio", "user": user}),
            Scenario::FundingHistory { coin, start_time } => {
                json!({"type": "fundingHistory", "coin": coin, "startTime": start_time})
            }
            Scenario::CandleSnapshot {
                coin,
                interval,
                start_time,
                end_time,
            } => json!({
                "type": "candleSnapshot",
                "req": {
                    "coin": coin,
                    "interval": interval,
                    "startTime": start_time,
                    "endTime": end_time,
                }
            }),
        }
    }

    /// Comparison rules fitting this scenario's response shape.
    pub fn compare_options(&self) -> CompareOptions {
        match self {
            Scenario::AllMids => CompareOptions::top_level_map(),
            _ => CompareOptions::records_only(),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Start of the one-day lookback window ending at `now`. Saturates so a
/// clock before the epoch cannot underflow.
fn window_start(now: u64) -> u64 {
    now.saturating_sub(DAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_carries_type_discriminator() {
        for scenario in Scenario::all() {
            let payload = scenario.payload("0xabc");
            assert_eq!(
                payload.get("type").and_then(Value::as_str),
                Some(scenario.name()),
                "payload for {:?}",
                scenario
            );
        }
    }

    #[test]
    fn test_user_scoped_payloads_differ_per_chain() {
        let scenario = Scenario::ClearinghouseState;
        let hl = scenario.payload("0x5b9306593aE710a66832C4101E019E3E96f65d0a");
        let ambient = scenario.payload("5CcaDcVkVusXtPndVX8Hi4Wi68iw2hE6r6xcRmZ5NirK");
        assert_ne!(hl, ambient);
        assert_eq!(hl.get("type"), ambient.get("type"));
    }

    #[test]
    fn test_l2_book_payload() {
        let scenario = Scenario::L2Book {
            coin: "ETH".to_string(),
        };
        assert_eq!(
            scenario.payload("unused"),
            json!({"type": "l2Book", "coin": "ETH"})
        );
    }

    #[test]
    fn test_user_fills_by_time_payload() {
        let scenario = Scenario::UserFillsByTime { start_time: 100 };
        assert_eq!(
            scenario.payload("0xabc"),
            json!({
                "type": "userFillsByTime",
                "user": "0xabc",
                "startTime": 100,
                "aggregateByTime": true,
            })
        );
    }

    #[test]
    fn test_lookback_window_never_underflows() {
        assert_eq!(window_start(0), 0);
        assert_eq!(window_start(DAY_MS - 1), 0);
        assert_eq!(window_start(DAY_MS + 5), 5);
    }

    #[test]
    fn test_candle_snapshot_nests_request() {
        let scenario = Scenario::CandleSnapshot {
            coin: "BTC".to_string(),
            interval: "1m".to_string(),
            start_time: 100,
            end_time: 200,
        };
        let payload = scenario.payload("unused");
        assert_eq!(
            payload.get("req"),
            Some(&json!({
                "coin": "BTC",
                "interval": "1m",
                "startTime": 100,
                "endTime": 200,
            }))
        );
    }

    #[test]
    fn test_only_all_mids_enables_map_detection() {
        for scenario in Scenario::all() {
            let options = scenario.compare_options();
            let expects_map = scenario == Scenario::AllMids;
            assert_eq!(
                options.map_candidate_paths.contains(""),
                expects_map,
                "options for {:?}",
                scenario
            );
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for scenario in Scenario::all() {
            let reparsed = Scenario::from_name(scenario.name()).unwrap();
            assert_eq!(reparsed.name(), scenario.name());
        }
        assert_eq!(Scenario::from_name("spotMeta"), None);
    }
}
