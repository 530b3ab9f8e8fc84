//! Telemetry log summarizer
//!
//! Reads a newline-delimited JSON telemetry log produced by node runtimes
//! and prints aggregate counts plus the mean execution time. The module is
//! split into pure pieces:
//!
//! - `io` - lazy line-by-line reading of the open log file
//! - `record` - typed conversion of one parsed JSON line
//! - `summary` - the running aggregate and the summarize pass
//! - `format` - report rendering

pub mod format;
pub mod io;
pub mod record;
pub mod summary;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use thiserror::Error;

pub use record::EventRecord;
pub use summary::{summarize, TelemetrySummary};

/// Failure taxonomy for a summarizer run.
///
/// `MalformedLine` is the only recoverable variant: in best-effort mode the
/// summarize pass counts it and moves on, in strict mode it aborts the run.
/// Everything else is fatal regardless of mode.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("telemetry file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON on line {line}: {source}")]
    MalformedLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error("telemetry line is not a JSON object: {0}")]
    NotAnObject(serde_json::Value),

    #[error("non-numeric metrics.exec_time value: {0}")]
    NonNumericDuration(serde_json::Value),
}

/// Run the telemetry subcommand: summarize the log at `file` and print the
/// report to stdout.
pub fn run(file: &Path, strict: bool) -> Result<()> {
    let summary = summarize(file, strict)?;
    print!("{}", format::render_report(&summary, Utc::now()));
    Ok(())
}
