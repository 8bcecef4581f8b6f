//! HTTP response building module
//!
//! Builders for every response shape the site produces. HTML responses carry
//! the security headers; the error response never fails to build.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_SECURITY_POLICY, CONTENT_TYPE, ETAG,
    LOCATION, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::error::AppError;

pub type HttpResponse = Response<Full<Bytes>>;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content-Security-Policy for rendered pages
pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'self'; \
style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
font-src 'self' https://fonts.gstatic.com; \
img-src 'self' data: https:; \
script-src 'self' 'unsafe-inline'";

/// Security headers applied to every HTML page
const SECURITY_HEADERS: [(hyper::header::HeaderName, &str); 4] = [
    (CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY_VALUE),
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "SAMEORIGIN"),
    (REFERRER_POLICY, "no-referrer"),
];

fn with_security_headers(mut builder: Builder) -> Builder {
    for (name, value) in SECURITY_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}

/// Build HTML page response
pub fn build_html_response(status: StatusCode, html: String) -> Result<HttpResponse, AppError> {
    let builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, html.len());
    Ok(with_security_headers(builder).body(Full::new(Bytes::from(html)))?)
}

/// Build JSON response
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
) -> Result<HttpResponse, AppError> {
    let json = serde_json::to_vec(body)?;
    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(CONTENT_LENGTH, json.len())
        .body(Full::new(Bytes::from(json)))?)
}

/// Build 302 redirect response
pub fn build_redirect_response(target: &'static str) -> Result<HttpResponse, AppError> {
    Ok(Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, target)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from(format!("Found. Redirecting to {target}"))))?)
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Result<HttpResponse, AppError> {
    Ok(Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(ETAG, etag)
        .header(CACHE_CONTROL, "public, max-age=3600")
        .body(Full::new(Bytes::new()))?)
}

/// Build static asset response with cache control
pub fn build_cached_response(
    data: Vec<u8>,
    content_type: &str,
    etag: &str,
) -> Result<HttpResponse, AppError> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, data.len())
        .header(ETAG, etag)
        .header(CACHE_CONTROL, "public, max-age=3600")
        .body(Full::new(Bytes::from(data)))?)
}

/// Build the rendered error view response
///
/// Falls back to assembling the response by hand, so rendering an error can
/// never itself fail.
pub fn build_error_response(status: StatusCode, html: String) -> HttpResponse {
    let len = html.len();
    let mut response = Response::new(Full::new(Bytes::from(html)));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
    headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

/// Drop the body of a response, keeping status and headers (HEAD requests)
pub fn without_body(response: HttpResponse) -> HttpResponse {
    response.map(|_| Full::new(Bytes::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response_has_security_headers() {
        let resp = build_html_response(StatusCode::OK, "<p>hi</p>".to_string()).expect("builds");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], HTML_CONTENT_TYPE);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "9");
        assert_eq!(resp.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(
            resp.headers()[CONTENT_SECURITY_POLICY],
            CONTENT_SECURITY_POLICY_VALUE
        );
    }

    #[test]
    fn test_error_response_keeps_status() {
        let resp = build_error_response(StatusCode::NOT_FOUND, "missing".to_string());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[X_FRAME_OPTIONS], "SAMEORIGIN");
    }

    #[test]
    fn test_redirect_response() {
        let resp = build_redirect_response("/contact/success").expect("builds");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers()[LOCATION], "/contact/success");
    }

    #[test]
    fn test_without_body_keeps_headers() {
        let resp = build_json_response(StatusCode::OK, &serde_json::json!({"alive": true}))
            .expect("builds");
        let len = resp.headers()[CONTENT_LENGTH].clone();
        let head = without_body(resp);
        assert_eq!(head.headers()[CONTENT_LENGTH], len);
    }
}
