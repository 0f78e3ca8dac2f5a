use crate::logger;

use cp_config::LogLevel;

use googletest::prelude::*;
use tempfile::TempDir;

// Only one global logger per process, so this is the single test that installs it
#[test]
fn given_log_file_in_missing_dir_when_initialized_then_file_is_created() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log").join("portal.log");

    let result = logger::initialize(LogLevel(log::LevelFilter::Info), Some(log_path.clone()), false);

    assert_that!(result.is_ok(), eq(true));
    assert!(log_path.exists());
}
