//! Logger module
//!
//! Provides logging utilities for the web server including:
//! - Leveled application logging with structured fields
//! - Human-readable lines in development, JSON lines in production
//! - Access logging with multiple formats
//! - File-based logging support
//!
//! The [`Logger`] is an ordinary value owned by the application state and
//! handed to whatever needs it; there is no process-wide logger.

mod format;
mod writer;

use format::AccessFormat;
pub use format::AccessLogEntry;
use writer::LogWriter;

use crate::config::{Environment, LoggingConfig};
use chrono::{Local, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::net::SocketAddr;

/// Service name stamped on every structured log line
pub const SERVICE_NAME: &str = "jira-bootcamp-web";

const BANNER_RULE: &str = "======================================";

/// Structured key/value pairs attached to a log line
pub type Fields<'a> = &'a [(&'a str, Value)];

/// Log severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name, falling back to `Info` for anything unknown.
    ///
    /// `http` maps to `Info`; `verbose` and `silly` map to `Debug`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "verbose" | "silly" | "trace" => Self::Debug,
            _ => Self::Info,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Application logger
pub struct Logger {
    level: LogLevel,
    environment: Environment,
    access_log: bool,
    access_format: AccessFormat,
    writer: LogWriter,
}

impl Logger {
    /// Build a logger from configuration, opening log files if configured.
    pub fn new(config: &LoggingConfig, environment: Environment) -> std::io::Result<Self> {
        Ok(Self {
            level: LogLevel::parse(&config.level),
            environment,
            access_log: config.access_log,
            access_format: AccessFormat::parse(&config.access_log_format),
            writer: LogWriter::new(
                config.access_log_file.as_deref(),
                config.error_log_file.as_deref(),
            )?,
        })
    }

    /// Logger writing to stdout/stderr only
    #[cfg(test)]
    pub fn console(level: LogLevel, environment: Environment) -> Self {
        Self {
            level,
            environment,
            access_log: true,
            access_format: AccessFormat::Combined,
            writer: LogWriter::console(),
        }
    }

    pub const fn enabled(&self, level: LogLevel) -> bool {
        (level as u8) <= (self.level as u8)
    }

    pub fn error(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Error, message, fields);
    }

    pub fn warn(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Warn, message, fields);
    }

    pub fn info(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Info, message, fields);
    }

    pub fn debug(&self, message: &str, fields: Fields<'_>) {
        self.log(LogLevel::Debug, message, fields);
    }

    fn log(&self, level: LogLevel, message: &str, fields: Fields<'_>) {
        if !self.enabled(level) {
            return;
        }
        let line = self.format_line(level, message, fields);
        match level {
            LogLevel::Error | LogLevel::Warn => self.writer.err(&line),
            LogLevel::Info | LogLevel::Debug => self.writer.out(&line),
        }
    }

    /// Render one log line in the environment's format
    fn format_line(&self, level: LogLevel, message: &str, fields: Fields<'_>) -> String {
        if self.environment.is_production() {
            let mut obj = Map::new();
            obj.insert(
                "timestamp".to_string(),
                Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
            obj.insert("level".to_string(), Value::from(level.as_str()));
            obj.insert("message".to_string(), Value::from(message));
            obj.insert("service".to_string(), Value::from(SERVICE_NAME));
            obj.insert(
                "environment".to_string(),
                Value::from(self.environment.as_str()),
            );
            for (key, value) in fields {
                obj.insert((*key).to_string(), value.clone());
            }
            Value::Object(obj).to_string()
        } else {
            let mut line = format!(
                "{} [{}]: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level.as_str(),
                message
            );
            for (key, value) in fields {
                match value {
                    Value::String(s) => line.push_str(&format!(" {key}={s}")),
                    other => line.push_str(&format!(" {key}={other}")),
                }
            }
            line
        }
    }

    /// Log formatted access log entry
    pub fn log_access(&self, entry: &AccessLogEntry<'_>) {
        if self.access_log {
            self.writer.out(&entry.render(self.access_format));
        }
    }

    pub fn log_server_start(&self, addr: &SocketAddr, server_name: &str) {
        self.writer.out(BANNER_RULE);
        self.info(
            "Server started",
            &[
                ("url", Value::from(format!("http://{addr}"))),
                ("environment", Value::from(self.environment.as_str())),
                ("server", Value::from(server_name)),
            ],
        );
        self.info(
            "Health check available",
            &[("url", Value::from(format!("http://{addr}/health")))],
        );
        self.info("Log level", &[("level", Value::from(self.level.as_str()))]);
        self.writer.out(BANNER_RULE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("error"), LogLevel::Error);
        assert_eq!(LogLevel::parse("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::parse("verbose"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("http"), LogLevel::Info);
        assert_eq!(LogLevel::parse("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_level_filtering() {
        let logger = Logger::console(LogLevel::Warn, Environment::Test);
        assert!(logger.enabled(LogLevel::Error));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_production_line_is_json() {
        let logger = Logger::console(LogLevel::Info, Environment::Production);
        let line = logger.format_line(
            LogLevel::Warn,
            "Contact form validation failed",
            &[("errors", json!(["Valid email is required"]))],
        );
        let parsed: Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["service"], SERVICE_NAME);
        assert_eq!(parsed["environment"], "production");
        assert_eq!(parsed["errors"][0], "Valid email is required");
    }

    #[test]
    fn test_development_line_is_text() {
        let logger = Logger::console(LogLevel::Info, Environment::Development);
        let line = logger.format_line(
            LogLevel::Info,
            "AI chat request received",
            &[("provider", json!("openai")), ("messageLength", json!(12))],
        );
        assert!(line.contains("[info]: AI chat request received"));
        assert!(line.contains("provider=openai"));
        assert!(line.contains("messageLength=12"));
    }
}
