//! Tests for `src/logging.rs`.

use rejoinder::logging::{LoggingGuard, LOG_FILE_PREFIX};

#[test]
fn logging_guard_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<LoggingGuard>();
}

#[test]
fn init_file_creates_logs_dir() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let logs_dir = tmp.path().join("logs");
    assert!(!logs_dir.exists());

    // Only one global subscriber can be installed per process, so the
    // result is not asserted; the directory is created either way.
    let _result = rejoinder::logging::init_file(&logs_dir, "info");
    assert!(logs_dir.exists(), "logs directory should be created");
    assert_eq!(LOG_FILE_PREFIX, "rejoinder.log");
}
