//! # Hypernode Tools
//!
//! Node-side utility tools for the Hypernode network, bundled into one CLI.
//!
//! ## Usage
//!
//! ```bash
//! hypernode-tools telemetry --file events.jsonl [--strict]
//! hypernode-tools metrics
//! hypernode-tools convert --points 10000 [--alpha 0.002] [--reputation 0.95]
//! ```
//!
//! ## Modules
//!
//! - `telemetry` - JSONL telemetry log summarizer
//! - `metrics` - local CPU/memory probe for nodes and agents
//! - `rewards` - mock points -> HYPER conversion
//! - `agent` - template perceive/reason/act agent for SDK users
pub mod agent;
pub mod metrics;
pub mod rewards;
pub mod telemetry;
