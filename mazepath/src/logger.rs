//! Minimal stderr backend for the `log` facade.

use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable that overrides the `-v` count, e.g. `MAZEPATH_LOG=trace`.
pub const LOG_ENV: &str = "MAZEPATH_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Map a `-v` count to a level: warnings by default, then info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `MAZEPATH_LOG` wins over `verbosity` when it
/// holds a valid level name.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or_else(|| level_for(verbosity));
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
