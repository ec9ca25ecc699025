use anyhow::{anyhow, Result};
use axum::http::HeaderValue;
use std::env;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::llm_providers::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::llm_service::{LLMService, DEFAULT_TIMEOUT};

// Import logging macros
use crate::{log_system_event, log_validation};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Complete application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LLMConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

/// Text-completion provider configuration
#[derive(Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Browser origins allowed to call the API with credentials
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Logging system configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub console_enabled: bool,
    pub log_directory: String,
}

// Keeps the API key out of `{:?}` output
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_key", &mask_sensitive_data(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        log_system_event!(config, "Loading application configuration from environment variables");

        let config = Config {
            llm: LLMConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(),
        };

        log_system_event!(config, "Configuration loaded successfully");
        config.log_configuration_summary();

        Ok(config)
    }

    /// Log a summary of loaded configuration (without sensitive data)
    fn log_configuration_summary(&self) {
        info!(
            api_key_masked = %mask_sensitive_data(&self.llm.api_key),
            llm_model = %self.llm.model,
            llm_base_url = %self.llm.base_url,
            llm_timeout_secs = self.llm.timeout.as_secs(),
            server_address = %self.server.address(),
            cors_origins = ?self.cors.allowed_origins,
            log_level = %self.logging.level,
            "Configuration summary"
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(anyhow!("{} environment variable is required and cannot be empty", API_KEY_VAR));
        }

        if self.llm.timeout.is_zero() {
            return Err(anyhow!("LLM_TIMEOUT_SECS must be greater than 0"));
        }

        if self.server.port == 0 {
            return Err(anyhow!("Server port must be greater than 0"));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(anyhow!("CORS_ALLOWED_ORIGINS must list at least one origin"));
        }

        // Validate log level
        if !["trace", "debug", "info", "warn", "error"]
            .iter()
            .any(|level| self.logging.level.to_lowercase().contains(level))
        {
            warn!("Unrecognized log level '{}', logging may fall back to defaults", self.logging.level);
        }

        log_validation!(success, "configuration", "Configuration validation completed successfully");
        Ok(())
    }
}

impl LLMConfig {
    fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("{} environment variable is required and cannot be empty", API_KEY_VAR))?;

        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    anyhow!("Invalid LLM_TIMEOUT_SECS value: '{}'. Must be a whole number of seconds", raw)
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(LLMConfig {
            api_key,
            base_url,
            model,
            timeout,
        })
    }

    /// Build the shared completion handle described by this configuration
    pub fn build_service(&self) -> LLMService {
        LLMService::new_gemini(
            self.api_key.clone(),
            Some(self.base_url.clone()),
            Some(self.model.clone()),
            self.timeout,
        )
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        let port = port_str
            .parse::<u16>()
            .map_err(|_| anyhow!("Invalid PORT value: '{}'. Must be a number between 1-65535", port_str))?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(ServerConfig { port, host })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CorsConfig {
    fn from_env() -> Self {
        let allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        CorsConfig { allowed_origins }
    }

    /// Credentialed CORS cannot use wildcards, so methods and headers are
    /// mirrored from the preflight request instead.
    pub fn layer(&self) -> Result<CorsLayer> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| anyhow!("Invalid CORS origin: '{}'", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info,study_assistant=debug".to_string());

        let file_enabled = env::var("LOG_FILE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let console_enabled = env::var("LOG_CONSOLE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let log_directory = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        LoggingConfig {
            level,
            file_enabled,
            console_enabled,
            log_directory,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

/// Mask sensitive data in configuration for safe logging
fn mask_sensitive_data(data: &str) -> String {
    let chars: Vec<char> = data.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
