#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the game prompts
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by the `BATTLESHIP_LOG` environment variable, if it parses.
pub fn env_log_level() -> Option<LevelFilter> {
    env::var(LOG_ENV_VAR).ok().and_then(|lvl| lvl.parse().ok())
}

/// Install the logger. An explicit `level` wins over `BATTLESHIP_LOG`;
/// without either the level is `warn`.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.or_else(env_log_level).unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
