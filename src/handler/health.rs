//! Health check endpoints for container probes
//!
//! No dependency checks are made; a running process is a healthy one.

use crate::config::AppState;
use crate::error::AppError;
use crate::http::{build_json_response, HttpResponse};
use crate::logger::SERVICE_NAME;
use chrono::{SecondsFormat, Utc};
use hyper::StatusCode;
use serde::Serialize;
use serde_json::json;

const STATM_PATH: &str = "/proc/self/statm";
const PAGE_SIZE: u64 = 4096;
const MIB: u64 = 1024 * 1024;

#[derive(Debug, Serialize)]
struct Memory {
    #[serde(rename = "heapUsed")]
    heap_used: String,
    #[serde(rename = "heapTotal")]
    heap_total: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
    service: &'static str,
    version: &'static str,
    environment: &'static str,
    uptime: f64,
    memory: Memory,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse `/proc/self/statm` into (resident, virtual) sizes in bytes
fn parse_statm(statm: &str) -> Option<(u64, u64)> {
    let mut fields = statm.split_whitespace();
    let size: u64 = fields.next()?.parse().ok()?;
    let resident: u64 = fields.next()?.parse().ok()?;
    Some((resident * PAGE_SIZE, size * PAGE_SIZE))
}

fn memory_usage() -> Memory {
    let (used, total) = std::fs::read_to_string(STATM_PATH)
        .ok()
        .and_then(|s| parse_statm(&s))
        .unwrap_or((0, 0));
    Memory {
        heap_used: format!("{}MB", used / MIB),
        heap_total: format!("{}MB", total / MIB),
    }
}

pub fn health(state: &AppState) -> Result<HttpResponse, AppError> {
    build_json_response(
        StatusCode::OK,
        &Health {
            status: "healthy",
            timestamp: timestamp(),
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            environment: state.config.app.environment.as_str(),
            uptime: state.uptime_secs(),
            memory: memory_usage(),
        },
    )
}

pub fn ready() -> Result<HttpResponse, AppError> {
    build_json_response(
        StatusCode::OK,
        &json!({ "ready": true, "timestamp": timestamp() }),
    )
}

pub fn live() -> Result<HttpResponse, AppError> {
    build_json_response(
        StatusCode::OK,
        &json!({ "alive": true, "timestamp": timestamp() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statm() {
        assert_eq!(
            parse_statm("25600 5120 900 300 0 4000 0\n"),
            Some((5120 * PAGE_SIZE, 25600 * PAGE_SIZE))
        );
        assert_eq!(parse_statm(""), None);
        assert_eq!(parse_statm("abc def"), None);
    }

    #[test]
    fn test_memory_is_reported_in_megabytes() {
        let memory = memory_usage();
        assert!(memory.heap_used.ends_with("MB"));
        assert!(memory.heap_total.ends_with("MB"));
    }
}
