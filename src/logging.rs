#![cfg(feature = "std")]

use std::env;
use log::{LevelFilter, Log, Metadata, Record};

use crate::core::LOG_ENV;

/// Writes `LEVEL [target] message` lines to stderr so they never mix with
/// the grid on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `GRIDLOCK_LOG`, `warn` when unset or unparsable.
fn env_level() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. An explicit `level` wins over the environment.
/// Calling this twice keeps the first logger.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(env_level);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
