//! Aggregation over one telemetry log
//!
//! The running aggregate is built in a single pass and discarded after the
//! report is printed; nothing persists between runs.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::warn;

use super::io;
use super::record::EventRecord;
use super::TelemetryError;

/// Running totals over all valid event records of one pass.
#[derive(Debug, Default, PartialEq)]
pub struct TelemetrySummary {
    pub total: u64,
    pub success: u64,
    /// Distinct node identifiers, including the `None` bucket for events
    /// without one.
    pub nodes: BTreeSet<Option<String>>,
    /// Distinct task identifiers, same `None` convention.
    pub tasks: BTreeSet<Option<String>>,
    pub durations: Vec<f64>,
    /// Malformed lines skipped in best-effort mode. Not part of `total`.
    pub skipped: u64,
}

impl TelemetrySummary {
    /// Fold one event into the aggregate.
    pub fn record(&mut self, event: &EventRecord) {
        self.total += 1;
        self.nodes.insert(event.node_id.clone());
        self.tasks.insert(event.task_id.clone());
        if event.success == Some(true) {
            self.success += 1;
        }
        if let Some(exec_time) = event.exec_time {
            self.durations.push(exec_time);
        }
    }

    /// Arithmetic mean of the collected durations, 0.0 when none were seen.
    pub fn avg_exec_time(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        self.durations.iter().sum::<f64>() / self.durations.len() as f64
    }
}

/// Summarize the telemetry log at `path` in a single pass.
///
/// In best-effort mode (`strict = false`) malformed JSON lines are counted
/// and skipped; a warning with the skip count is logged after the pass. In
/// strict mode the first malformed line aborts the run. A missing file, a
/// non-object line, and a non-numeric `metrics.exec_time` are fatal in
/// either mode.
pub fn summarize(path: &Path, strict: bool) -> Result<TelemetrySummary, TelemetryError> {
    let mut summary = TelemetrySummary::default();

    for parsed in io::open_event_log(path)? {
        let value = match parsed {
            Ok(value) => value,
            Err(err @ TelemetryError::MalformedLine { .. }) => {
                if strict {
                    return Err(err);
                }
                summary.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        let event = EventRecord::from_value(&value)?;
        summary.record(&event);
    }

    if summary.skipped > 0 {
        warn!(
            skipped = summary.skipped,
            file = %path.display(),
            "skipped malformed telemetry lines"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("events.jsonl");
        fs::write(&path, contents).unwrap();
        path
    }

    const TWO_EVENTS: &str = concat!(
        "{\"node_id\":\"a\",\"task_id\":\"t1\",\"success\":true,\"metrics\":{\"exec_time\":2.0}}\n",
        "{\"node_id\":\"b\",\"task_id\":\"t1\",\"success\":false}\n",
    );

    #[test]
    fn test_two_event_example() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, TWO_EVENTS);

        let summary = summarize(&path, false).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.nodes.len(), 2);
        assert_eq!(summary.tasks.len(), 1);
        assert_eq!(summary.avg_exec_time(), 2.0);
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "");

        let summary = summarize(&path, false).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.success, 0);
        assert_eq!(summary.nodes.len(), 0);
        assert_eq!(summary.tasks.len(), 0);
        assert_eq!(summary.avg_exec_time(), 0.0);
    }

    #[test]
    fn test_missing_identifiers_share_one_bucket() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "{\"node_id\":null,\"success\":true}\n{\"success\":false}\n",
        );

        let summary = summarize(&path, false).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.nodes.len(), 1);
        assert_eq!(summary.tasks.len(), 1);
    }

    #[test]
    fn test_malformed_line_skipped_and_counted() {
        let dir = TempDir::new().unwrap();
        let contents = format!("not json at all\n{}", TWO_EVENTS);
        let path = write_log(&dir, &contents);

        let summary = summarize(&path, false).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.nodes.len(), 2);
        assert_eq!(summary.tasks.len(), 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_strict_mode_fails_on_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "{\"ok\":true}\nnot json at all\n");

        let err = summarize(&path, true).unwrap_err();
        assert!(matches!(err, TelemetryError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_exec_time_aborts() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "{\"metrics\":{\"exec_time\":\"fast\"}}\n");

        let err = summarize(&path, false).unwrap_err();
        assert!(matches!(err, TelemetryError::NonNumericDuration(_)));
    }

    #[test]
    fn test_missing_file_fails_fast() {
        let err = summarize(Path::new("/nonexistent/events.jsonl"), false).unwrap_err();
        assert!(matches!(err, TelemetryError::FileNotFound(_)));
    }

    #[test]
    fn test_success_bounded_by_total() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            "{\"success\":true}\n{\"success\":true}\n{\"success\":\"yes\"}\n",
        );

        let summary = summarize(&path, false).unwrap();
        // Non-boolean success values do not count.
        assert_eq!(summary.total, 3);
        assert_eq!(summary.success, 2);
        assert!(summary.success <= summary.total);
        assert!(summary.durations.len() as u64 <= summary.total);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, TWO_EVENTS);

        let first = summarize(&path, false).unwrap();
        let second = summarize(&path, false).unwrap();
        assert_eq!(first, second);
    }
}
