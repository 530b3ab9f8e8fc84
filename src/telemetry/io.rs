//! File I/O for telemetry logs
//!
//! Opens a JSONL log and yields parsed JSON values one line at a time.
//! The iterator is single-pass over the open file handle; the file is
//! closed when the iterator is dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde_json::Value;

use super::TelemetryError;

/// Lazy iterator over the parsed lines of one telemetry log.
///
/// Empty and whitespace-only lines are skipped outright. A line that fails
/// to parse as JSON yields `TelemetryError::MalformedLine` carrying its
/// 1-based line number; the caller decides whether that is fatal.
#[derive(Debug)]
pub struct JsonLines {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl Iterator for JsonLines {
    type Item = Result<Value, TelemetryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(match serde_json::from_str(trimmed) {
                Ok(value) => Ok(value),
                Err(source) => Err(TelemetryError::MalformedLine {
                    line: self.line_no,
                    source,
                }),
            });
        }
    }
}

/// Open a telemetry log for a single summarize pass.
///
/// Fails fast with `FileNotFound` before any processing when the path does
/// not exist.
pub fn open_event_log(path: &Path) -> Result<JsonLines, TelemetryError> {
    if !path.exists() {
        return Err(TelemetryError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    Ok(JsonLines {
        lines: BufReader::new(file).lines(),
        line_no: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_log(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("events.jsonl");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_open_event_log_missing_file() {
        let err = open_event_log(Path::new("/nonexistent/events.jsonl")).unwrap_err();
        assert!(matches!(err, TelemetryError::FileNotFound(_)));
    }

    #[test]
    fn test_reads_valid_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "{\"node_id\":\"a\"}\n{\"node_id\":\"b\"}\n");

        let values: Vec<_> = open_event_log(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["node_id"], "a");
    }

    #[test]
    fn test_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "\n   \n{\"node_id\":\"a\"}\n\n");

        let values: Vec<_> = open_event_log(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_malformed_line_carries_line_number() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "{\"ok\":true}\nnot json at all\n{\"ok\":true}\n");

        let results: Vec<_> = open_event_log(&path).unwrap().collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(TelemetryError::MalformedLine { line, .. }) => assert_eq!(*line, 2),
            other => panic!("expected MalformedLine, got {:?}", other),
        }
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, "");

        assert_eq!(open_event_log(&path).unwrap().count(), 0);
    }
}
