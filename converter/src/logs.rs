//! Console logging with a broadcast tap.
//!
//! Every entry is printed (info and success to stdout, warnings and errors to
//! stderr) and sent on a broadcast channel, so callers such as tests can
//! observe what a batch reported.

use once_cell::sync::Lazy;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, for per-file detail lines
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, indent: u8) -> Self {
        Self { level, message: message.into(), indent }
    }

    fn render(&self) -> String {
        let marker = match self.level {
            LogLevel::Info => "  ",
            LogLevel::Success => "  ✓",
            LogLevel::Warning => "  ⚠",
            LogLevel::Error => "  ✗",
        };
        format!("{}{} {}", "   ".repeat(self.indent as usize), marker, self.message)
    }
}

/// Process-wide logger used by the conversion pipeline
pub static LOG_BROADCASTER: Lazy<LogBroadcaster> = Lazy::new(LogBroadcaster::new);

pub struct LogBroadcaster {
    sender: broadcast::Sender<LogEntry>,
}

impl LogBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    pub fn log(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info | LogLevel::Success => println!("{}", entry.render()),
            LogLevel::Warning | LogLevel::Error => eprintln!("{}", entry.render()),
        }

        // No receivers is the normal case outside tests
        let _ = self.sender.send(entry);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.sender.subscribe()
    }
}

pub fn log_info(msg: impl Into<String>) {
    LOG_BROADCASTER.log(LogEntry::new(LogLevel::Info, msg, 0));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOG_BROADCASTER.log(LogEntry::new(LogLevel::Info, msg, indent));
}

pub fn log_success(msg: impl Into<String>) {
    LOG_BROADCASTER.log(LogEntry::new(LogLevel::Success, msg, 0));
}

pub fn log_warning(msg: impl Into<String>) {
    LOG_BROADCASTER.log(LogEntry::new(LogLevel::Warning, msg, 0));
}

pub fn log_error(msg: impl Into<String>) {
    LOG_BROADCASTER.log(LogEntry::new(LogLevel::Error, msg, 0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_entries() {
        let broadcaster = LogBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.log(LogEntry::new(LogLevel::Error, "boom", 1));

        let entry = rx.try_recv().unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "boom");
        assert_eq!(entry.indent, 1);
    }

    #[test]
    fn test_render_marker_and_indent() {
        assert_eq!(LogEntry::new(LogLevel::Success, "done", 0).render(), "  ✓ done");
        assert_eq!(LogEntry::new(LogLevel::Info, "file", 1).render(), "      file");
    }
}
