//! Access log line rendering
//!
//! `combined` is the default. `common` drops referer and user agent, and
//! `json` emits one object per request with the same keys the application
//! log uses in production.

use chrono::{DateTime, Local};
use serde_json::json;
use std::time::Duration;

/// Layout of an access log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessFormat {
    #[default]
    Combined,
    Common,
    Json,
}

impl AccessFormat {
    /// Unknown names select `combined`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "common" | "clf" => Self::Common,
            "json" => Self::Json,
            _ => Self::Combined,
        }
    }
}

/// One served request, borrowed from the request parts
#[derive(Debug, Clone)]
pub struct AccessLogEntry<'a> {
    pub client_ip: String,
    pub time: DateTime<Local>,
    pub method: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub version: &'static str,
    pub status: u16,
    pub bytes: u64,
    pub referer: Option<&'a str>,
    pub user_agent: Option<&'a str>,
    pub elapsed: Duration,
}

impl AccessLogEntry<'_> {
    pub fn render(&self, format: AccessFormat) -> String {
        match format {
            AccessFormat::Combined => format!(
                "{} \"{}\" \"{}\"",
                self.common(),
                self.referer.unwrap_or("-"),
                self.user_agent.unwrap_or("-"),
            ),
            AccessFormat::Common => self.common(),
            AccessFormat::Json => json!({
                "timestamp": self.time.to_rfc3339(),
                "ip": self.client_ip,
                "method": self.method,
                "url": self.target(),
                "httpVersion": self.version,
                "status": self.status,
                "bytes": self.bytes,
                "referer": self.referer,
                "userAgent": self.user_agent,
                "responseTimeMs": self.elapsed.as_secs_f64() * 1000.0,
            })
            .to_string(),
        }
    }

    /// Path plus query string, as the client sent it
    fn target(&self) -> String {
        match self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.to_string(),
        }
    }

    // ip - - [time] "METHOD target HTTP/x" status bytes
    fn common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.client_ip,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.target(),
            self.version,
            self.status,
            self.bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry<'static> {
        AccessLogEntry {
            client_ip: "192.168.1.1".to_string(),
            time: Local::now(),
            method: "GET",
            path: "/courses/jsm",
            query: Some("ref=home"),
            version: "1.1",
            status: 200,
            bytes: 1234,
            referer: Some("https://example.com"),
            user_agent: Some("Mozilla/5.0"),
            elapsed: Duration::from_micros(1500),
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(AccessFormat::parse("JSON"), AccessFormat::Json);
        assert_eq!(AccessFormat::parse("clf"), AccessFormat::Common);
        assert_eq!(AccessFormat::parse("fancy"), AccessFormat::Combined);
    }

    #[test]
    fn test_combined_line() {
        let line = entry().render(AccessFormat::Combined);
        assert!(line.starts_with("192.168.1.1 - - ["));
        assert!(line.contains("\"GET /courses/jsm?ref=home HTTP/1.1\" 200 1234"));
        assert!(line.ends_with("\"https://example.com\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_common_line_omits_client_headers() {
        let line = entry().render(AccessFormat::Common);
        assert!(line.ends_with("200 1234"));
        assert!(!line.contains("Mozilla"));
    }

    #[test]
    fn test_json_line() {
        let line = entry().render(AccessFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
        assert_eq!(parsed["ip"], "192.168.1.1");
        assert_eq!(parsed["url"], "/courses/jsm?ref=home");
        assert_eq!(parsed["status"], 200);
        let ms = parsed["responseTimeMs"].as_f64().expect("numeric response time");
        assert!((ms - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_headers_render_as_dash() {
        let mut e = entry();
        e.query = None;
        e.referer = None;
        e.user_agent = None;
        let line = e.render(AccessFormat::Combined);
        assert!(line.contains("\"GET /courses/jsm HTTP/1.1\""));
        assert!(line.ends_with("\"-\" \"-\""));
    }
}
