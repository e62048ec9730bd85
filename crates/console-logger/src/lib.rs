//! Console Logger
//!
//! `log` backend for the browser: records go to `console.error/warn/info/debug`
//! with a local timestamp and the app name.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.into(),
            level,
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, &self.app_name, record.level(), record.target(), &record.args().to_string());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// `[12:00:01.250] [Kangyur] INFO catalog: message`
pub fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {} {}: {}", timestamp, app_name, level, target, message)
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger as the global `log` backend
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}
