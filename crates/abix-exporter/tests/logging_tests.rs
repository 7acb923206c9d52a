//! Tests for the log events emitted while extracting

use abix_exporter::{process_file, run, ExtractorConfig};
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber writing to memory on this thread, return the output
fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

// ============================================================================
// PER-FILE EVENTS
// ============================================================================

#[test]
fn test_parse_failure_logged_with_file_name_and_reason() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let source = input.path().join("C.json");
    fs::write(&source, "not valid json").unwrap();
    let reason = serde_json::from_str::<serde_json::Value>("not valid json")
        .unwrap_err()
        .to_string();

    let logs = capture_logs(|| {
        let outcome = process_file(&source, output.path(), false);
        assert!(outcome.is_failed());
    });

    assert!(logs.contains("WARN"), "logs: {}", logs);
    assert!(logs.contains("file=C.json"), "logs: {}", logs);
    assert!(logs.contains(&reason), "logs: {}", logs);
}

#[test]
fn test_written_file_logged() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let source = input.path().join("A.json");
    fs::write(&source, r#"{"abi":[{"type":"fallback"},{"type":"receive"}]}"#).unwrap();

    let logs = capture_logs(|| {
        process_file(&source, output.path(), false);
    });

    assert!(logs.contains("INFO"), "logs: {}", logs);
    assert!(logs.contains("file=A.json"), "logs: {}", logs);
    assert!(logs.contains("entries=2"), "logs: {}", logs);
}

// ============================================================================
// RUN-LEVEL EVENTS
// ============================================================================

#[test]
fn test_listing_failure_logged() {
    let output = tempdir().unwrap();
    let config = ExtractorConfig::new("/nonexistent/build/contracts", output.path());

    let logs = capture_logs(|| {
        assert!(run(&config).is_err());
    });

    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("unable to scan artifact directory"), "logs: {}", logs);
    assert!(logs.contains("/nonexistent/build/contracts"), "logs: {}", logs);
}

#[test]
fn test_empty_directory_logs_no_warnings() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config = ExtractorConfig::new(input.path(), output.path());

    let logs = capture_logs(|| {
        assert!(run(&config).unwrap().is_success());
    });

    assert!(!logs.contains("WARN"), "logs: {}", logs);
    assert!(!logs.contains("ERROR"), "logs: {}", logs);
}
