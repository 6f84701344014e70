//! In-app activity log: user-visible events such as socket connects,
//! disconnects and failed saves, shown by [`crate::ActivityLogPanel`].

use dioxus::prelude::*;

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn class(&self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str, timestamp: String) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.to_string(),
        });
        let overflow = self.entries.len().saturating_sub(MAX_ENTRIES);
        self.entries.drain(..overflow);
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{message}"),
        LogLevel::Warning => tracing::warn!("{message}"),
        LogLevel::Info | LogLevel::Success => tracing::info!("{message}"),
    }
    log.write().push(level, message, current_time());
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, &format!("event {i}"), "12:00:00".to_string());
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "event 5");
    }

    #[test]
    fn test_has_errors() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Warning, "Chat desconectado", String::new());
        assert!(!log.has_errors());
        log.push(LogLevel::Error, "Falha ao salvar", String::new());
        assert!(log.has_errors());
        assert_eq!(log.entries[1].level.class(), "activity-log-entry error");
    }
}
