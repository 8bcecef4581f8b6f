//! AI assistant placeholder
//!
//! Reports which providers have keys configured and answers chat requests
//! with a canned "coming soon" reply. No provider is ever called.

use crate::config::{AiConfig, AppState};
use crate::content::AI_FEATURES;
use crate::error::AppError;
use crate::handler::RequestContext;
use crate::http::{body, build_html_response, build_json_response, HttpResponse};
use crate::views;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const DEFAULT_PROVIDER: &str = "openai";

/// Availability of a single provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    pub configured: bool,
    pub status: &'static str,
}

impl ProviderStatus {
    fn from_key(key: Option<&str>) -> Self {
        let configured = key.is_some_and(|k| !k.trim().is_empty());
        Self {
            configured,
            status: if configured { "ready" } else { "not_configured" },
        }
    }
}

/// Availability of every supported provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiStatus {
    pub openai: ProviderStatus,
    pub anthropic: ProviderStatus,
    pub rovo: ProviderStatus,
}

impl AiStatus {
    pub fn from_config(config: &AiConfig) -> Self {
        Self {
            openai: ProviderStatus::from_key(config.openai_api_key.as_deref()),
            anthropic: ProviderStatus::from_key(config.anthropic_api_key.as_deref()),
            rovo: ProviderStatus::from_key(config.rovo_api_key.as_deref()),
        }
    }

    pub const fn providers(&self) -> [(&'static str, &ProviderStatus); 3] {
        [
            ("openai", &self.openai),
            ("anthropic", &self.anthropic),
            ("rovo", &self.rovo),
        ]
    }

    pub fn any_configured(&self) -> bool {
        self.providers().iter().any(|(_, p)| p.configured)
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    provider: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatReply {
    response: String,
    provider: &'static str,
    status: &'static str,
}

fn placeholder_reply(message: &str) -> String {
    format!(
        "🚧 AI Assistant coming soon!\n\n\
         In the bootcamp, you'll learn how to integrate:\n\
         - OpenAI ChatGPT API\n\
         - Anthropic Claude API\n\
         - Atlassian Rovo\n\n\
         Your question: \"{message}\"\n\n\
         This will be answered by AI once integration is complete."
    )
}

pub fn page(state: &AppState) -> Result<HttpResponse, AppError> {
    let status = AiStatus::from_config(&state.config.ai);
    build_html_response(
        StatusCode::OK,
        views::ai_page(&status, AI_FEATURES)?,
    )
}

pub fn chat(state: &AppState, ctx: &RequestContext<'_>) -> Result<HttpResponse, AppError> {
    let request: ChatRequest = body::decode(ctx.content_type(), ctx.body)?;
    let Some(message) = request.message.filter(|m| !m.trim().is_empty()) else {
        return build_json_response(
            StatusCode::BAD_REQUEST,
            &json!({ "error": "Message is required" }),
        );
    };
    let provider = request.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);

    state.logger.info(
        "AI chat request received",
        &[
            ("provider", Value::from(provider)),
            ("messageLength", Value::from(message.chars().count())),
        ],
    );

    build_json_response(
        StatusCode::OK,
        &ChatReply {
            response: placeholder_reply(&message),
            provider: "placeholder",
            status: "coming_soon",
        },
    )
}

pub fn status(state: &AppState) -> Result<HttpResponse, AppError> {
    build_json_response(
        StatusCode::OK,
        &json!({
            "status": "coming_soon",
            "services": AiStatus::from_config(&state.config.ai),
            "message": "AI integration is being developed. Check back soon!",
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status() {
        let config = AiConfig {
            openai_api_key: Some("sk-live".to_string()),
            anthropic_api_key: Some("  ".to_string()),
            rovo_api_key: None,
        };
        let status = AiStatus::from_config(&config);
        assert!(status.openai.configured);
        assert_eq!(status.openai.status, "ready");
        assert!(!status.anthropic.configured);
        assert_eq!(status.rovo.status, "not_configured");
        assert!(status.any_configured());
        assert!(!AiStatus::from_config(&AiConfig::default()).any_configured());
    }

    #[test]
    fn test_placeholder_quotes_message() {
        let reply = placeholder_reply("How do I write JQL?");
        assert!(reply.starts_with("🚧 AI Assistant coming soon!"));
        assert!(reply.contains("Your question: \"How do I write JQL?\""));
    }
}
