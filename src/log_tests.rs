//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger, and the
//! global logger slot. Tests that swap the global logger are serialized.

use crate::log::{
    log, log_detailed, reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger,
};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use serial_test::serial;

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
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Trace, LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Debug), "Debug");
    assert_eq!(format!("{:?}", LogSeverity::Info), "Info");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "texpool::TexturePool".to_string(),
        message: "pool destroyed".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "texpool::TexturePool");
    assert_eq!(entry.message, "pool destroyed");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "texpool::TexturePool".to_string(),
        message: "device free failed".to_string(),
        file: Some("texture_pool.rs"),
        line: Some(42),
    };

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.file, Some("texture_pool.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry1 = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "test".to_string(),
        message: "warning".to_string(),
        file: Some("test.rs"),
        line: Some(10),
    };

    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities_without_file_line() {
    let logger = DefaultLogger;
    let timestamp = SystemTime::now();

    // Just verify no branch panics
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        let entry = LogEntry {
            severity,
            timestamp,
            source: "test".to_string(),
            message: format!("{:?} message", severity),
            file: None,
            line: None,
        };
        logger.log(&entry);
    }
}

#[test]
fn test_default_logger_with_file_line() {
    let logger = DefaultLogger;
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "texpool::TexturePool".to_string(),
        message: "critical error".to_string(),
        file: Some("texture_pool.rs"),
        line: Some(123),
    };

    // Test the file:line branch
    logger.log(&entry);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

/// Captures every entry handed to the global slot
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_set_logger_routes_entries() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });

    log(
        LogSeverity::Info,
        "texpool::test",
        "captured message".to_string(),
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "texpool::test");
        assert_eq!(captured[0].message, "captured message");
        assert!(captured[0].file.is_none());
    }

    reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_file_line() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });

    log_detailed(
        LogSeverity::Error,
        "texpool::test",
        "detailed".to_string(),
        "some_file.rs",
        77,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("some_file.rs"));
        assert_eq!(captured[0].line, Some(77));
    }

    reset_logger();
}

#[test]
#[serial]
fn test_pool_macros_use_global_logger() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });

    crate::pool_trace!("texpool::test", "trace {}", 1);
    crate::pool_debug!("texpool::test", "debug {}", 2);
    crate::pool_info!("texpool::test", "info {}", 3);
    crate::pool_warn!("texpool::test", "warn {}", 4);
    crate::pool_error!("texpool::test", "error {}", 5);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 5);
        assert_eq!(captured[0].severity, LogSeverity::Trace);
        assert_eq!(captured[1].severity, LogSeverity::Debug);
        assert_eq!(captured[2].severity, LogSeverity::Info);
        assert_eq!(captured[3].severity, LogSeverity::Warn);
        assert_eq!(captured[4].severity, LogSeverity::Error);

        // Only the error macro records the call site
        assert!(captured[3].file.is_none());
        assert!(captured[4].file.is_some());
        assert!(captured[4].line.is_some());
        assert_eq!(captured[4].message, "error 5");
    }

    reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });
    reset_logger();

    // After reset, entries go to DefaultLogger (stdout), not the capture
    log(LogSeverity::Info, "texpool::test", "uncaptured".to_string());
    assert!(entries.lock().unwrap().is_empty());
}
