//! Logging backend for gallifrey
//!
//! Plain text via `env_logger` by default. A level prefixed with `json`
//! (e.g. `json:debug`) switches to one JSON object per line, written to
//! `GALLIFREY_LOG_PATH` if set, otherwise stderr.

use crate::signing::defaults::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, LOG_PATH_ENV};
use chrono::{Local, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

/// JSON line logger
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    target_file: Mutex<Option<File>>,
}

/// One JSON log line
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    #[serde(rename = "@timestamp")]
    timestamp: String,
    #[serde(rename = "@level")]
    level: String,
    #[serde(rename = "@message")]
    message: String,
    #[serde(rename = "@module")]
    module: &'a str,
    #[serde(rename = "@pid")]
    pid: u32,
}

impl<'a> LogEntry<'a> {
    fn from_record(record: &'a Record<'_>) -> Self {
        LogEntry {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            level: record.level().to_string().to_lowercase(),
            message: record.args().to_string(),
            module: record.target(),
            pid: std::process::id(),
        }
    }
}

impl JsonLogger {
    pub fn new(level: Level, log_path: Option<String>) -> Self {
        let target_file = log_path
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            level,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize logging from a level string such as `debug` or `json:info`
    pub fn init_with_level(level_str: &str) {
        let (use_json, actual_level) = split_level(level_str);
        let level_filter = parse_level_filter(actual_level);

        if !use_json {
            let result = env_logger::Builder::new()
                .filter_level(level_filter)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return;
        }

        let Some(level) = level_filter.to_level() else {
            log::set_max_level(LevelFilter::Off);
            return;
        };

        let logger = Box::new(JsonLogger::new(level, env::var(LOG_PATH_ENV).ok()));
        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return;
        }
        log::set_max_level(level_filter);
    }

    /// Initialize from `GALLIFREY_LOG_LEVEL`, defaulting to warnings only
    pub fn init() {
        let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Self::init_with_level(&level);
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "{}\n",
            serde_json::to_string(&LogEntry::from_record(record)).unwrap_or_default()
        );

        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(line.as_bytes());
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.target_file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}

/// Split `json:<level>` / `json` / `<level>` into (json?, level)
fn split_level(level_str: &str) -> (bool, &str) {
    if let Some(stripped) = level_str.strip_prefix("json:") {
        (true, stripped)
    } else if level_str == "json" {
        (true, "info")
    } else {
        (false, level_str)
    }
}

fn parse_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}
