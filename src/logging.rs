use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug)]
struct FileLogger {
    log_file: PathBuf,
    level: Level,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "{} {} [{}] {}\n",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_file)
            {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger writing to `<log_dir>/log.txt`.
///
/// The terminal is in raw mode while the app runs, so nothing is ever logged to stdout.
pub fn init(log_dir: PathBuf, debug: bool) -> Result<()> {
    create_dir_all(&log_dir)?;

    let level = if debug { Level::Debug } else { Level::Info };
    let logger = LOGGER.get_or_init(|| FileLogger {
        log_file: log_dir.join("log.txt"),
        level,
    });

    log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    Ok(())
}
