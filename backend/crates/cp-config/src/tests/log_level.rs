use crate::{LoggingConfig, LogLevel};

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_logging_section_parses_from_toml() {
    let config: LoggingConfig = toml::from_str("level = \"trace\"\ncolored = false").unwrap();

    assert_eq!(*config.level, LevelFilter::Trace);
    assert!(!config.colored);
    assert_eq!(config.dir, crate::DEFAULT_LOG_DIRECTORY);
    assert!(config.file.is_none());
}
