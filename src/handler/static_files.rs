//! Static file serving module
//!
//! Serves stylesheets, scripts and images from the public directory with
//! MIME detection and `ETag` revalidation.

use crate::config::AppState;
use crate::error::AppError;
use crate::handler::RequestContext;
use crate::http::{build_304_response, build_cached_response, cache, mime, HttpResponse};
use crate::logger::Logger;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a file below `static.public_dir`
///
/// `segments` are the non-empty path segments of the request. Missing files
/// and paths escaping the public directory are reported as not found.
pub async fn serve(
    state: &AppState,
    ctx: &RequestContext<'_>,
    segments: &[&str],
) -> Result<HttpResponse, AppError> {
    let not_found = || AppError::route_not_found(ctx.url());
    let public_dir = Path::new(&state.config.static_files.public_dir);

    let file_path = resolve(public_dir, segments, &state.logger).ok_or_else(not_found)?;
    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            state.logger.error(
                "Failed to read file",
                &[
                    ("path", Value::from(file_path.display().to_string())),
                    ("error", Value::from(e.to_string())),
                ],
            );
            return Err(not_found());
        }
    };

    let etag = cache::etag_for(&content);
    if cache::is_fresh(ctx.if_none_match(), &etag) {
        return build_304_response(&etag);
    }

    let content_type = mime::content_type_for(&file_path);
    build_cached_response(content, content_type, &etag)
}

/// Map request segments onto a file inside `public_dir`
fn resolve(public_dir: &Path, segments: &[&str], logger: &Logger) -> Option<PathBuf> {
    if segments.iter().any(|s| *s == ".." || s.contains('\\')) {
        logger.warn(
            "Path traversal attempt blocked",
            &[("path", Value::from(segments.join("/")))],
        );
        return None;
    }

    let public_canonical = match public_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger.warn(
                "Public directory not found or inaccessible",
                &[
                    ("dir", Value::from(public_dir.display().to_string())),
                    ("error", Value::from(e.to_string())),
                ],
            );
            return None;
        }
    };

    let file_path: PathBuf = segments.iter().fold(public_dir.to_path_buf(), |p, s| p.join(s));

    // File not found is common (404), no need to log at warning level
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&public_canonical) {
        logger.warn(
            "Path traversal attempt blocked",
            &[("path", Value::from(file_canonical.display().to_string()))],
        );
        return None;
    }
    file_canonical.is_file().then_some(file_canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::logger::LogLevel;

    fn quiet() -> Logger {
        Logger::console(LogLevel::Error, Environment::Test)
    }

    #[test]
    fn test_resolve_existing_asset() {
        let path = resolve(Path::new("public"), &["css", "style.css"], &quiet());
        assert!(path.is_some_and(|p| p.ends_with("public/css/style.css")));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        assert!(resolve(Path::new("public"), &["css", "..", "..", "Cargo.toml"], &quiet()).is_none());
    }

    #[test]
    fn test_resolve_missing_file_and_directory() {
        assert!(resolve(Path::new("public"), &["css", "missing.css"], &quiet()).is_none());
        assert!(resolve(Path::new("public"), &["css"], &quiet()).is_none());
        assert!(resolve(Path::new("no-such-dir"), &["css", "style.css"], &quiet()).is_none());
    }
}
