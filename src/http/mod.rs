//! HTTP protocol layer module
//!
//! Response builders, request body decoding and static asset helpers,
//! decoupled from the page handlers.

pub mod body;
pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_304_response, build_cached_response, build_error_response, build_html_response,
    build_json_response, build_redirect_response, without_body, HttpResponse,
};
