//! Report rendering for the telemetry summary

use chrono::{DateTime, Utc};

use super::summary::TelemetrySummary;

/// Pure function to render the fixed-format summary report.
///
/// The generation timestamp is injected so the rendering itself stays
/// deterministic and testable.
pub fn render_report(summary: &TelemetrySummary, generated_at: DateTime<Utc>) -> String {
    let mut out = String::from("---- Telemetry Summary ----\n");
    out.push_str(&format!("Events: {}\n", summary.total));
    out.push_str(&format!("Success: {}\n", summary.success));
    out.push_str(&format!("Nodes: {}\n", summary.nodes.len()));
    out.push_str(&format!("Tasks: {}\n", summary.tasks.len()));
    out.push_str(&format!(
        "Avg exec time (s): {:.3}\n",
        summary.avg_exec_time()
    ));
    out.push_str(&format!(
        "Generated at: {} Z\n",
        generated_at.format("%Y-%m-%dT%H:%M:%S%.6f")
    ));
    out
}
