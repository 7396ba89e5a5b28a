// ../tests/logging.rs
use elden_scout::error::AppError;
use elden_scout::logging;
use tempfile::tempdir;

// The logger is process-global, so everything about it lives in one test.
#[test]
fn test_file_logger_installs_once_and_writes_entries() {
    let dir = tempdir().expect("temp dir");
    let log_dir = dir.path().join("data");

    logging::init(log_dir.clone(), true).expect("first install succeeds");
    log::info!("Scouting Stormveil");
    log::debug!("Debug entries are kept in debug mode");

    let contents = std::fs::read_to_string(log_dir.join("log.txt")).expect("log file");
    assert!(contents.contains("INFO"));
    assert!(contents.contains("Scouting Stormveil"));
    assert!(contents.contains("Debug entries are kept in debug mode"));

    let second = logging::init(log_dir, false);
    assert!(matches!(second, Err(AppError::Logger(_))));
}
