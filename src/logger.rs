use std::sync::OnceLock;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Console backend for the `log` facade
pub struct Logger {
    prefix: Option<String>,
    level: LevelFilter,
}

impl Logger {
    fn new(prefix: Option<String>, level: LevelFilter) -> Self {
        Self { prefix, level }
    }

    fn format(&self, record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {} {}", timestamp, prefix, record.level(), record.args())
        } else {
            format!("[{}] {} {}", timestamp, record.level(), record.args())
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the console board
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| Logger::new(prefix, level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
