//! Local node metrics probe
//!
//! Samples CPU usage and used memory for the machine this node runs on and
//! reports them as a single JSON object. CPU usage needs two refreshes
//! separated by a short interval before the reading is meaningful, so
//! `sample` blocks for roughly [`CPU_SAMPLE_INTERVAL`].

use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use sysinfo::System;

/// Delay between the two CPU refreshes of one sample.
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One metrics sample, serialized as the probe's JSON output.
///
/// Fields are `None` (JSON `null`) when the platform cannot report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMetrics {
    pub cpu_usage: Option<f32>,
    pub memory_used_mb: Option<f64>,
    /// Unix timestamp in seconds.
    pub timestamp: f64,
}

/// Wrapper around the system handle so repeated samples reuse one
/// refreshed view.
pub struct SystemProbe {
    system: System,
}

impl SystemProbe {
    pub fn new() -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        Self { system }
    }

    /// Take one CPU/memory sample.
    pub fn sample(&mut self) -> NodeMetrics {
        let timestamp = unix_timestamp();

        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return NodeMetrics {
                cpu_usage: None,
                memory_used_mb: None,
                timestamp,
            };
        }

        self.system.refresh_cpu_usage();
        thread::sleep(CPU_SAMPLE_INTERVAL);
        self.system.refresh_all();

        let cpu = self.system.global_cpu_usage();
        let used_mb = self.system.used_memory() as f64 / BYTES_PER_MB;

        NodeMetrics {
            cpu_usage: Some(cpu),
            memory_used_mb: Some(round2(used_mb)),
            timestamp,
        }
    }

    /// Used memory as a percentage of total, for agent state reporting.
    pub fn memory_percent(&self) -> Option<f32> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let total = self.system.total_memory();
        if total == 0 {
            return None;
        }
        Some((self.system.used_memory() as f64 / total as f64 * 100.0) as f32)
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the metrics subcommand: print one sample as a JSON line.
pub fn run() -> Result<()> {
    let metrics = SystemProbe::new().sample();
    println!("{}", serde_json::to_string(&metrics)?);
    Ok(())
}
