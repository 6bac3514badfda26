//! Integration tests comparing Ambient info responses against Hyperliquid
//!
//! The live tests require network access to both backends and are ignored by
//! default.
//!
//! # Running locally
//!
//! ```bash
//! cargo test -p hl-parity -- --ignored --nocapture
//! ```
//!
//! # Environment Variables
//!
//! - `HYPERLIQUID_API_URL`: reference API (default: https://api.hyperliquid.xyz)
//! - `AMBIENT_API_URL`: replacement API (default: https://embindexer.net/ember/api/dev/v1)
//! - `HYPERLIQUID_TEST_USER`: EVM test address on the Hyperliquid chain
//! - `AMBIENT_TEST_USER`: SS58 test address on the Ambient chain

use hl_parity::config::ParityConfig;
use hl_parity::harness::ParityHarness;
use hl_parity::scenario::Scenario;
use json_shape::{compare_shapes, CompareOptions};
use serde_json::json;

/// The comparator accepts value drift between backends, end to end.
#[test]
fn test_mid_price_drift_is_shape_compatible() {
    let hyperliquid = json!({"BTC": {"px": "1", "sz": "2"}});
    let ambient = json!({"BTC": {"px": "3", "sz": "4"}});
    let report = compare_shapes(
        &hyperliquid,
        &ambient,
        &Scenario::AllMids.compare_options(),
    );
    assert!(report.matches(), "{:?}", report.mismatches);
}

/// A renamed record field is a reportable divergence, end to end.
#[test]
fn test_renamed_field_is_reported() {
    let report = compare_shapes(
        &json!({"px": "1"}),
        &json!({"sz": "1"}),
        &CompareOptions::records_only(),
    );
    assert!(!report.matches());
    assert_eq!(
        report.mismatches[0].to_string(),
        "key mismatch at <root>: only in first: [\"px\"] only in second: [\"sz\"]"
    );
}

/// Canonical scenarios - runs against both live backends
#[tokio::test]
#[ignore] // Run with: cargo test -p hl-parity -- --ignored --nocapture
async fn test_canonical_scenarios_match() {
    let config = ParityConfig::from_env();
    let mut harness = ParityHarness::new(config);

    harness
        .run_all(&Scenario::canonical())
        .await
        .expect("info call failed");

    harness.print_summary();
    assert!(harness.all_passed(), "Some scenarios diverged in shape");
}

/// Every known scenario - runs against both live backends
#[tokio::test]
#[ignore]
async fn test_all_scenarios_match() {
    let config = ParityConfig::from_env();
    let mut harness = ParityHarness::new(config);

    harness
        .run_all(&Scenario::all())
        .await
        .expect("info call failed");

    harness.print_summary();
    assert!(harness.all_passed(), "Some scenarios diverged in shape");
}
