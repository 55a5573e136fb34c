//! Structured JSON logger
//!
//! One log line = one event. Lines are JSON objects with deterministic
//! (alphabetical) key order, written synchronously with no buffering.
//! Warnings and errors go to stderr, everything else to stdout.

use std::fmt;
use std::io::{self, Write};

use serde_json::{json, Value};

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// String representation used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Log an info-level event
    pub fn info(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log a warning
    pub fn warn(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log an error
    pub fn error(event: &str, fields: &[(&str, String)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log an event with explicit severity
    pub fn log(severity: Severity, event: &str, fields: &[(&str, String)]) {
        let line = Self::render(severity, event, fields);

        if severity >= Severity::Warn {
            let mut stderr = io::stderr();
            let _ = writeln!(stderr, "{}", line);
            let _ = stderr.flush();
        } else {
            let mut stdout = io::stdout();
            let _ = writeln!(stdout, "{}", line);
            let _ = stdout.flush();
        }
    }

    /// Renders one log line.
    ///
    /// serde_json maps iterate in key order, which keeps the output
    /// deterministic for a given field set.
    fn render(severity: Severity, event: &str, fields: &[(&str, String)]) -> String {
        let mut map = serde_json::Map::new();
        map.insert("event".to_string(), json!(event));
        map.insert("level".to_string(), json!(severity.as_str()));
        for (key, value) in fields {
            map.insert((*key).to_string(), json!(value));
        }

        Value::Object(map).to_string()
    }
}
