//! File-based logging using simplelog
//!
//! Debug builds write next to the binary's working directory, release builds
//! into the cache directory (~/.cache/shopfront-lander/ on Linux). The
//! terminal belongs to the TUI, so nothing is ever logged to it.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// One file per run, e.g. `debug-20260101-120000.log`
fn log_file_name(started: DateTime<Local>) -> String {
    format!("debug-{}.log", started.format("%Y%m%d-%H%M%S"))
}

fn log_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::new();
    }
    shopfront_config::cache_dir().unwrap_or_default()
}

/// Level from a `RUST_LOG` value; anything unrecognised means Info
fn parse_level(value: &str) -> LevelFilter {
    value
        .trim()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger and return where it writes
///
/// Only records from the shopfront crates are kept.
pub fn init() -> Result<PathBuf> {
    let log_file = log_dir().join(log_file_name(Local::now()));

    let level = match std::env::var("RUST_LOG") {
        Ok(value) => parse_level(&value),
        Err(_) => LevelFilter::Debug,
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("shopfront")
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder)
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {:?}", log_file))?;
    WriteLogger::init(level, config, file).context("Logger already initialized")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level(" warn "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("shopfront=debug"), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_name() {
        let started = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(log_file_name(started), "debug-20260307-090501.log");
    }
}
