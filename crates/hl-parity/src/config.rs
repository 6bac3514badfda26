//! Configuration for the parity harness

use std::env;

/// Endpoint URLs and per-chain test identifiers.
///
/// Defaults are the values used during the Ambient migration; every field can
/// be overridden through the environment. The two user identifiers are not
/// interchangeable: Hyperliquid accounts are 0x-prefixed EVM addresses while
/// Ambient accounts are SS58 addresses, so user-scoped scenarios build a
/// different payload per backend.
#[derive(Debug, Clone)]
pub struct ParityConfig {
    /// Base URL of the reference Hyperliquid API
    pub hyperliquid_url: String,
    /// Base URL of the Ambient replacement API
    pub ambient_url: String,
    /// Test account on the Hyperliquid chain
    pub hyperliquid_user: String,
    /// Test account on the Ambient chain
    pub ambient_user: String,
}

impl Default for ParityConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ParityConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            hyperliquid_url: env::var("HYPERLIQUID_API_URL")
                .unwrap_or_else(|_| "https://api.hyperliquid.xyz".to_string()),
            ambient_url: env::var("AMBIENT_API_URL")
                .unwrap_or_else(|_| "https://embindexer.net/ember/api/dev/v1".to_string()),
            hyperliquid_user: env::var("HYPERLIQUID_TEST_USER")
                .unwrap_or_else(|_| "0x5b9306593aE710a66832C4101E019E3E96f65d0a".to_string()),
            ambient_user: env::var("AMBIENT_TEST_USER")
                .unwrap_or_else(|_| "5CcaDcVkVusXtPndVX8Hi4Wi68iw2hE6r6xcRmZ5NirK".to_string()),
        }
    }
}
