//! Shape-parity harness for the Hyperliquid → Ambient info API migration
//!
//! Ambient exposes a drop-in replacement for the Hyperliquid `/info`
//! endpoint. This crate sends the same info call to both backends and checks
//! that the responses are structurally compatible, ignoring leaf values
//! (prices move; field layouts should not).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐      ┌─────────────────┐
//! │  Hyperliquid    │      │  Ambient        │
//! │  (reference)    │      │  (replacement)  │
//! │  POST /info     │      │  POST /info     │
//! └────────┬────────┘      └────────┬────────┘
//!          │                        │
//!          └──────────┬─────────────┘
//!                     │
//!              ┌──────▼──────┐
//!              │ json-shape  │
//!              │ comparator  │
//!              └─────────────┘
//! ```

pub mod client;
pub mod config;
pub mod harness;
pub mod scenario;
