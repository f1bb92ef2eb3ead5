//! Console Logging
//!
//! `log` backend writing to the browser console. Records are printed as
//! `[target] message` with the console method matching the level.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    // Module paths are noise in the console; keep the last segment
    let target = target.rsplit("::").next().unwrap_or(target);
    match level {
        Level::Error | Level::Warn | Level::Info => format!("[{}] {}", target, message),
        Level::Debug | Level::Trace => format!("[{}] {} {}", target, level, message),
    }
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_last_target_segment() {
        assert_eq!(
            format_record(Level::Warn, "item_picker_ui::components::list_view", "page failed"),
            "[list_view] page failed"
        );
        assert_eq!(format_record(Level::Info, "api", "ok"), "[api] ok");
    }

    #[test]
    fn test_format_marks_debug() {
        assert_eq!(format_record(Level::Debug, "dnd", "drop"), "[dnd] DEBUG drop");
    }
}
