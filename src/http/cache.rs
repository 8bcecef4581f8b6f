//! Validators for conditional GETs on static assets

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Strong `ETag` for a file body: `"<len>-<hash>"`
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Whether the client's cached copy is still current
///
/// `If-None-Match` may list several tags, weak (`W/`) ones included, or `*`.
pub fn is_fresh(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    header
        .split(',')
        .map(|tag| tag.trim())
        .map(|tag| tag.strip_prefix("W/").unwrap_or(tag))
        .any(|tag| tag == "*" || tag == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_tracks_content() {
        let etag = etag_for(b"body { color: #0052CC; }");
        assert!(etag.starts_with("\"18-"));
        assert!(etag.ends_with('"'));
        assert_eq!(etag, etag_for(b"body { color: #0052CC; }"));
        assert_ne!(etag, etag_for(b"body { color: #00875A; }"));
    }

    #[test]
    fn test_if_none_match_forms() {
        let etag = "\"a-abc123\"";
        assert!(is_fresh(Some("\"a-abc123\""), etag));
        assert!(is_fresh(Some("\"xyz\", \"a-abc123\""), etag));
        assert!(is_fresh(Some("W/\"a-abc123\""), etag));
        assert!(is_fresh(Some("*"), etag));
        assert!(!is_fresh(Some("\"different\""), etag));
        assert!(!is_fresh(None, etag));
    }
}
