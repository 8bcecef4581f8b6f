//! Content page handlers
//!
//! Each handler reads the catalog and renders one view. Unknown ids raise
//! `NotFound`, which the router turns into the error view.

use crate::config::{AppState, BannerConfig, BannerSource};
use crate::content::{HIGHLIGHTS, PHASES, SDLC_PHASES, TIMING, WEEKLY_SCHEDULE};
use crate::error::AppError;
use crate::http::{build_html_response, HttpResponse};
use crate::logger::Logger;
use crate::views;
use hyper::StatusCode;
use serde_json::Value;

/// Resolve the home page banner image URL
///
/// Remote banner storage is not wired up; `s3` falls back to the local image.
pub fn banner_url(config: &BannerConfig, logger: &Logger) -> String {
    if config.source == BannerSource::S3 {
        logger.info(
            "S3 banner source not available, using local banner",
            &[("path", Value::from(config.local_path.as_str()))],
        );
    }
    config.local_path.clone()
}

pub fn home(state: &AppState) -> Result<HttpResponse, AppError> {
    let banner = banner_url(&state.config.banner, &state.logger);
    build_html_response(StatusCode::OK, views::home_page(&banner, HIGHLIGHTS)?)
}

pub fn register() -> Result<HttpResponse, AppError> {
    build_html_response(StatusCode::OK, views::register_page()?)
}

pub fn courses(state: &AppState) -> Result<HttpResponse, AppError> {
    build_html_response(
        StatusCode::OK,
        views::courses_page(state.catalog.modules(), SDLC_PHASES)?,
    )
}

pub fn module(state: &AppState, id: &str) -> Result<HttpResponse, AppError> {
    let module = state
        .catalog
        .module(id)
        .ok_or_else(|| AppError::NotFound(format!("Module '{id}' not found")))?;
    build_html_response(StatusCode::OK, views::module_page(module)?)
}

pub fn schedule() -> Result<HttpResponse, AppError> {
    build_html_response(
        StatusCode::OK,
        views::schedule_page(WEEKLY_SCHEDULE, PHASES, &TIMING)?,
    )
}

pub fn tools(state: &AppState) -> Result<HttpResponse, AppError> {
    build_html_response(
        StatusCode::OK,
        views::tools_page(state.catalog.tools_by_category(), state.catalog.tools().len())?,
    )
}

pub fn tool(state: &AppState, id: &str) -> Result<HttpResponse, AppError> {
    let tool = state
        .catalog
        .tool(id)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{id}' not found")))?;
    build_html_response(StatusCode::OK, views::tool_page(tool)?)
}
