//! Request body decoding
//!
//! Form posts arrive either urlencoded (browser forms) or as JSON (scripts
//! calling the chat endpoint). Both decode into the same serde target.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::AppError;

/// Whether a Content-Type header denotes a JSON body
pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        ct.split(';')
            .next()
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
    })
}

/// Decode a urlencoded body into key/value pairs (last duplicate wins)
pub fn parse_urlencoded(body: &[u8]) -> Map<String, Value> {
    form_urlencoded::parse(body)
        .into_owned()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Decode a request body into `T` based on its Content-Type
///
/// Anything that is not JSON is treated as urlencoded form data. An empty
/// body decodes as an empty object.
pub fn decode<T: DeserializeOwned>(content_type: Option<&str>, body: &[u8]) -> Result<T, AppError> {
    let value = if is_json(content_type) && !body.is_empty() {
        serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?
    } else if is_json(content_type) {
        Value::Object(Map::new())
    } else {
        Value::Object(parse_urlencoded(body))
    };
    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Unexpected request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Chat {
        message: Option<String>,
        provider: Option<String>,
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("Application/JSON; charset=utf-8")));
        assert!(!is_json(Some("application/x-www-form-urlencoded")));
        assert!(!is_json(None));
    }

    #[test]
    fn test_decode_urlencoded() {
        let chat: Chat = decode(
            Some("application/x-www-form-urlencoded"),
            b"message=What+is+JQL%3F&provider=claude",
        )
        .expect("decodes");
        assert_eq!(chat.message.as_deref(), Some("What is JQL?"));
        assert_eq!(chat.provider.as_deref(), Some("claude"));
    }

    #[test]
    fn test_decode_json() {
        let chat: Chat = decode(Some("application/json"), br#"{"message":"hello"}"#).expect("decodes");
        assert_eq!(chat.message.as_deref(), Some("hello"));
        assert!(chat.provider.is_none());
    }

    #[test]
    fn test_decode_empty_bodies() {
        let chat: Chat = decode(Some("application/json"), b"").expect("decodes");
        assert!(chat.message.is_none());
        let chat: Chat = decode(None, b"").expect("decodes");
        assert!(chat.message.is_none());
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err = decode::<Chat>(Some("application/json"), b"{").unwrap_err();
        assert_eq!(err.status(), hyper::StatusCode::BAD_REQUEST);
        let err = decode::<Chat>(Some("application/json"), br#"{"message":5}"#).unwrap_err();
        assert_eq!(err.status(), hyper::StatusCode::BAD_REQUEST);
    }
}
