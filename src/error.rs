//! Request error taxonomy and the production/development detail policy.

use crate::config::Environment;
use hyper::StatusCode;
use std::error::Error as _;
use thiserror::Error;

/// Type-erased failure from a request body stream
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const NOT_FOUND_MESSAGE: &str = "Page not found";
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Anything that stops a handler from producing its normal response
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown route or unknown catalog id
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Request body too large (max: {max} bytes)")]
    PayloadTooLarge { max: u64 },

    #[error("Failed to read request body")]
    Body(#[source] BoxError),

    #[error("Failed to build response")]
    Http(#[from] hyper::http::Error),

    #[error("Failed to serialize response")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render page")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn route_not_found(url: &str) -> Self {
        Self::NotFound(format!("Not Found - {url}"))
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) | Self::Http(_) | Self::Json(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The error's message followed by each underlying cause
    pub fn diagnostic(&self) -> String {
        let mut trail = format!("{self}");
        let mut source = self.source();
        while let Some(cause) = source {
            trail.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        trail.push_str(&format!("\n\n{self:?}"));
        trail
    }
}

/// What the error view shows for one error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
    /// Diagnostic trail, only outside production
    pub detail: Option<String>,
}

impl ErrorPage {
    pub fn from_error(err: &AppError, environment: Environment) -> Self {
        let status = err.status();
        if environment.is_production() {
            let message = if status == StatusCode::NOT_FOUND {
                NOT_FOUND_MESSAGE
            } else {
                GENERIC_MESSAGE
            };
            Self {
                status,
                message: message.to_string(),
                detail: None,
            }
        } else {
            Self {
                status,
                message: err.to_string(),
                detail: Some(err.diagnostic()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::route_not_found("/nope").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::PayloadTooLarge { max: 5 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            AppError::from(json_err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_production_hides_details() {
        let page = ErrorPage::from_error(
            &AppError::NotFound("Module 'x' not found".into()),
            Environment::Production,
        );
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert_eq!(page.message, NOT_FOUND_MESSAGE);
        assert!(page.detail.is_none());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let page = ErrorPage::from_error(&AppError::from(json_err), Environment::Production);
        assert_eq!(page.message, GENERIC_MESSAGE);
        assert!(page.detail.is_none());
    }

    #[test]
    fn test_development_shows_details() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let page = ErrorPage::from_error(&AppError::from(json_err), Environment::Development);
        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(page.message, "Failed to serialize response");
        let detail = page.detail.expect("detail present in development");
        assert!(detail.contains("caused by: EOF while parsing"));
    }
}
