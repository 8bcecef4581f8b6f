//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: body size check, method and path
//! matching, error rendering and access logging.

use crate::config::AppState;
use crate::error::{AppError, BoxError, ErrorPage};
use crate::handler::{ai, contact, health, pages, static_files};
use crate::http::{self, HttpResponse};
use crate::logger::AccessLogEntry;
use crate::views;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::{Body, Bytes, Incoming};
use hyper::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, IF_NONE_MATCH, REFERER, SERVER, USER_AGENT};
use hyper::http::request::Parts;
use hyper::{HeaderMap, Method, Request, Version};
use serde_json::Value;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Method used for routing; `HEAD` is routed as `GET`
    pub method: Method,
    pub path: &'a str,
    pub headers: &'a HeaderMap,
    pub body: &'a [u8],
    pub client_ip: IpAddr,
    url: String,
}

impl<'a> RequestContext<'a> {
    pub fn new(parts: &'a Parts, body: &'a [u8], client_ip: IpAddr) -> Self {
        let method = if parts.method == Method::HEAD {
            Method::GET
        } else {
            parts.method.clone()
        };
        Self {
            method,
            path: parts.uri.path(),
            headers: &parts.headers,
            body,
            client_ip,
            url: parts
                .uri
                .path_and_query()
                .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string()),
        }
    }

    /// Path plus query string, as requested
    pub fn url(&self) -> &str {
        &self.url
    }

    fn header(&self, name: hyper::header::HeaderName) -> Option<&'a str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&'a str> {
        self.header(CONTENT_TYPE)
    }

    pub fn if_none_match(&self) -> Option<&'a str> {
        self.header(IF_NONE_MATCH)
    }

    pub fn user_agent(&self) -> Option<&'a str> {
        self.header(USER_AGENT)
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();

    let response = match read_body(&parts.headers, body, state.config.http.max_body_size).await {
        Ok(bytes) => dispatch(&state, &parts, &bytes, peer_addr.ip()).await,
        Err(err) => {
            let ctx = RequestContext::new(&parts, &[], peer_addr.ip());
            render_error(&state, &ctx, &err)
        }
    };

    let response = with_server_header(response, &state.config.http.server_name);
    log_access(&state, &parts, &response, peer_addr, started);
    Ok(response)
}

/// Read the whole request body, enforcing the configured size limit
///
/// A declared `Content-Length` over the limit is rejected before reading.
/// Bodies without one are read through a `Limited` wrapper that stops at the
/// first frame past the limit.
async fn read_body<B>(headers: &HeaderMap, body: B, max_body_size: u64) -> Result<Bytes, AppError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    if let Some(size) = declared_length(headers) {
        check_body_size(size, max_body_size)?;
    }
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.is::<LengthLimitError>() => Err(AppError::PayloadTooLarge {
            max: max_body_size,
        }),
        Err(err) => Err(AppError::Body(err)),
    }
}

fn check_body_size(size: u64, max: u64) -> Result<(), AppError> {
    if size > max {
        Err(AppError::PayloadTooLarge { max })
    } else {
        Ok(())
    }
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Route a fully read request and render its response
///
/// Errors raised by handlers are rendered through the error view here, so
/// the result is always a complete response. `HEAD` responses keep their
/// headers and lose their body.
pub async fn dispatch(state: &AppState, parts: &Parts, body: &[u8], client_ip: IpAddr) -> HttpResponse {
    let ctx = RequestContext::new(parts, body, client_ip);
    let response = match route(state, &ctx).await {
        Ok(response) => response,
        Err(err) => render_error(state, &ctx, &err),
    };
    if parts.method == Method::HEAD {
        http::without_body(response)
    } else {
        response
    }
}

/// Route request based on method and path segments
///
/// Empty segments are dropped, so trailing slashes and doubled slashes
/// reach the same handler as the canonical path.
async fn route(state: &AppState, ctx: &RequestContext<'_>) -> Result<HttpResponse, AppError> {
    let segments: Vec<&str> = ctx.path.split('/').filter(|s| !s.is_empty()).collect();

    match (&ctx.method, segments.as_slice()) {
        (&Method::GET, []) => pages::home(state),
        (&Method::GET, ["register"]) => pages::register(),
        (&Method::GET, ["courses"]) => pages::courses(state),
        (&Method::GET, ["courses", id]) => pages::module(state, id),
        (&Method::GET, ["schedule"]) => pages::schedule(),
        (&Method::GET, ["tools"]) => pages::tools(state),
        (&Method::GET, ["tools", id]) => pages::tool(state, id),

        (&Method::GET, ["contact"]) => contact::form(),
        (&Method::POST, ["contact"]) => contact::submit(state, ctx),
        (&Method::GET, ["contact", "success"]) => contact::success(),

        (&Method::GET, ["ai"]) => ai::page(state),
        (&Method::POST, ["ai", "chat"]) => ai::chat(state, ctx),
        (&Method::GET, ["ai", "status"]) => ai::status(state),

        (&Method::GET, ["health"]) => health::health(state),
        (&Method::GET, ["health", "ready"]) => health::ready(),
        (&Method::GET, ["health", "live"]) => health::live(),

        (&Method::GET, ["css" | "js" | "images", _, ..] | ["favicon.ico"]) => {
            static_files::serve(state, ctx, &segments).await
        }

        _ => Err(AppError::route_not_found(ctx.url())),
    }
}

/// Log an error and render the error view for it
fn render_error(state: &AppState, ctx: &RequestContext<'_>, err: &AppError) -> HttpResponse {
    let page = ErrorPage::from_error(err, state.config.app.environment);
    state.logger.error(
        &err.to_string(),
        &[
            ("status", Value::from(page.status.as_u16())),
            ("method", Value::from(ctx.method.as_str())),
            ("url", Value::from(ctx.url())),
            ("ip", Value::from(ctx.client_ip.to_string())),
            ("userAgent", Value::from(ctx.user_agent().unwrap_or("-"))),
        ],
    );
    let html = views::error_page(&page).unwrap_or_else(|e| {
        state.logger.error(
            "Failed to render error page",
            &[("error", Value::from(e.to_string()))],
        );
        format!("<h1>{}</h1>", page.status.as_u16())
    });
    http::build_error_response(page.status, html)
}

fn with_server_header(mut response: HttpResponse, server_name: &str) -> HttpResponse {
    if let Ok(value) = HeaderValue::from_str(server_name) {
        response.headers_mut().insert(SERVER, value);
    }
    response
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

fn log_access(
    state: &AppState,
    parts: &Parts,
    response: &HttpResponse,
    peer_addr: SocketAddr,
    started: Instant,
) {
    let header = |name: hyper::header::HeaderName| {
        parts.headers.get(name).and_then(|v| v.to_str().ok())
    };

    let entry = AccessLogEntry {
        client_ip: peer_addr.ip().to_string(),
        time: chrono::Local::now(),
        method: parts.method.as_str(),
        path: parts.uri.path(),
        query: parts.uri.query(),
        version: version_label(parts.version),
        status: response.status().as_u16(),
        bytes: response.body().size_hint().exact().unwrap_or(0),
        referer: header(REFERER),
        user_agent: header(USER_AGENT),
        elapsed: started.elapsed(),
    };
    state.logger.log_access(&entry);
}
