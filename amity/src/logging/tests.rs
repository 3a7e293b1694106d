use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{create_non_blocking_file, level_to_log_level, log_level_to_level, parse_log_level};
use std::sync::Once;
use tempfile::tempdir;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            file: None,
            stdout: true,
        };

        assert!(crate::logging::init(&config).is_ok());
    });

    // A second init must be tolerated
    assert!(crate::logging::init(&LoggingConfig::default()).is_ok());
}

#[test]
fn test_file_writer_creates_parent_directories() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("logs/nested/amity.log");

    let (_writer, _guard) = create_non_blocking_file(&log_path).unwrap();

    assert!(log_path.parent().unwrap().exists());
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);

    for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Error] {
        assert_eq!(level_to_log_level(log_level_to_level(&level)), level);
    }
}
