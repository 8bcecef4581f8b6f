// Configuration module entry point
// Loads layered configuration and owns the per-process application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AiConfig, BannerConfig, BannerSource, Config, Environment, LoggingConfig};

/// Conventional flat environment variables and the keys they override.
///
/// `NODE_ENV` and `APP_ENV` both select the environment; `APP_ENV` wins.
const FLAT_OVERRIDES: &[(&str, &str)] = &[
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("NODE_ENV", "app.environment"),
    ("APP_ENV", "app.environment"),
    ("LOG_LEVEL", "logging.level"),
    ("BANNER_SOURCE", "banner.source"),
    ("OPENAI_API_KEY", "ai.openai_api_key"),
    ("ANTHROPIC_API_KEY", "ai.anthropic_api_key"),
    ("ATLASSIAN_ROVO_API_KEY", "ai.rovo_api_key"),
];

impl Config {
    /// Load configuration from `config.toml` (optional) and the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::load_from("config", |name| std::env::var(name).ok())
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// `lookup` resolves the conventional flat variables (`PORT`, `NODE_ENV`, ...),
    /// which take precedence over everything else.
    pub fn load_from<F>(config_path: &str, lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BOOTCAMP").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("app.environment", "development")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("http.server_name", "bootcamp-web")?
            .set_default("http.max_body_size", 102_400)? // 100KB
            .set_default("performance.request_timeout", 30)?
            .set_default("performance.keep_alive", true)?
            .set_default("static.public_dir", "public")?
            .set_default("banner.source", "local")?
            .set_default("banner.local_path", "/images/1.png")?;

        for (var, key) in FLAT_OVERRIDES {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::load_from("does-not-exist", |name| map.get(name).cloned())
            .expect("configuration should load")
    }

    #[test]
    fn test_defaults() {
        let cfg = load_with(&[]);
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.app.environment, Environment::Development);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.banner.source, BannerSource::Local);
        assert_eq!(cfg.banner.local_path, "/images/1.png");
        assert!(cfg.ai.openai_api_key.is_none());
    }

    #[test]
    fn test_flat_overrides() {
        let cfg = load_with(&[
            ("PORT", "8081"),
            ("NODE_ENV", "production"),
            ("LOG_LEVEL", "debug"),
            ("OPENAI_API_KEY", "sk-test"),
        ]);
        assert_eq!(cfg.server.port, 8081);
        assert!(cfg.app.environment.is_production());
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.ai.openai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_unknown_environment_is_development() {
        let cfg = load_with(&[("NODE_ENV", "staging")]);
        assert_eq!(cfg.app.environment, Environment::Development);
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let cfg = load_with(&[("ANTHROPIC_API_KEY", "  ")]);
        assert!(cfg.ai.anthropic_api_key.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = load_with(&[("HOST", "127.0.0.1"), ("PORT", "4000")]);
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 4000);
    }
}
