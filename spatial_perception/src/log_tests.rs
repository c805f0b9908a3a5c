//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global Log slot.

use super::*;
use serial_test::serial;
use std::sync::{Arc, Mutex};

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "perception::Test".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

/// Logger that records every entry it receives
#[derive(Clone, Default)]
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn captured(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_round_trips_through_u8() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity as u8), severity);
    }
    assert_eq!(LogSeverity::from_u8(200), LogSeverity::Error);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_with_file_line() {
    let e = entry(LogSeverity::Error, Some("tree.rs"), Some(42));
    assert_eq!(e.severity, LogSeverity::Error);
    assert_eq!(e.source, "perception::Test");
    assert_eq!(e.file, Some("tree.rs"));
    assert_eq!(e.line, Some(42));
}

#[test]
fn test_log_entry_debug_format() {
    let e = entry(LogSeverity::Debug, None, None);
    let debug_str = format!("{:?}", e);
    assert!(debug_str.contains("Debug"));
    assert!(debug_str.contains("perception::Test"));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Both branches (with and without file:line) must not panic
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("test.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CaptureLogger>();
}

// ============================================================================
// GLOBAL LOG SLOT TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_routes_macros() {
    let capture = CaptureLogger::default();
    Log::set_logger(capture.clone());
    Log::set_min_severity(LogSeverity::Trace);

    crate::perception_trace!("perception::Test", "trace {}", 1);
    crate::perception_info!("perception::Test", "info {}", 2);
    crate::perception_error!("perception::Test", "error {}", 3);

    Log::set_min_severity(LogSeverity::Info);
    Log::reset_logger();

    let captured: Vec<LogEntry> = capture
        .captured()
        .into_iter()
        .filter(|e| e.source == "perception::Test")
        .collect();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].message, "trace 1");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert!(captured[2].file.is_some());
    assert!(captured[2].line.is_some());
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let capture = CaptureLogger::default();
    Log::set_logger(capture.clone());
    Log::set_min_severity(LogSeverity::Warn);

    assert!(!Log::enabled(LogSeverity::Info));
    assert!(Log::enabled(LogSeverity::Error));

    crate::perception_debug!("perception::Filter", "dropped");
    crate::perception_warn!("perception::Filter", "kept");

    Log::set_min_severity(LogSeverity::Info);
    Log::reset_logger();

    let messages: Vec<String> = capture
        .captured()
        .into_iter()
        .filter(|e| e.source == "perception::Filter")
        .map(|e| e.message)
        .collect();
    assert_eq!(messages, vec!["kept".to_string()]);
}

#[test]
#[serial]
fn test_perception_err_logs_and_returns_error() {
    let capture = CaptureLogger::default();
    Log::set_logger(capture.clone());

    let error = crate::perception_err!("perception::ErrTest", crate::error::Error::EmptyBounds);
    Log::reset_logger();

    assert_eq!(error, crate::error::Error::EmptyBounds);
    let logged: Vec<LogEntry> = capture
        .captured()
        .into_iter()
        .filter(|e| e.source == "perception::ErrTest")
        .collect();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Error);
    assert!(logged[0].message.contains("Empty bounding volume"));
}
