//! Server configuration loaded from defaults, a TOML file, and the environment.

use config::{Config, Environment, File};
use readmeriser_core::{
    DEFAULT_APP_TITLE, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE, GenerationSettings,
};
use readmeriser_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 10000;
/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Prefix for optional environment overrides, e.g. `READMERISER_MODEL`.
pub const ENV_PREFIX: &str = "READMERISER";

/// Complete server configuration.
///
/// `api` and `url` have no defaults; everything else does.
#[derive(Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerConfig {
    /// Bearer token for the chat-completion endpoint
    api: String,
    /// Full chat-completion endpoint URL
    url: String,
    /// Listen address
    #[serde(default = "default_host")]
    host: String,
    /// Listen port
    #[serde(default = "default_port")]
    port: u16,
    /// Upstream model identifier
    #[serde(default = "default_model")]
    model: String,
    /// System message preceding the prompt
    #[serde(default = "default_system_prompt")]
    system_prompt: String,
    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,
    /// Sent upstream as `X-Title`
    #[serde(default = "default_app_title")]
    app_title: String,
    /// Fixed `HTTP-Referer`; derived from the request's Host header when unset
    #[serde(default)]
    site_url: Option<String>,
    /// Upstream request timeout; no timeout when unset
    #[serde(default)]
    request_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api", &"<redacted>")
            .field("url", &self.url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("app_title", &self.app_title)
            .field("site_url", &self.site_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Loads configuration.
    ///
    /// Sources, lowest precedence first:
    /// - serde defaults
    /// - the TOML file at `path`, if it exists
    /// - `READMERISER_*` environment variables
    /// - `API`, `URL` and `PORT`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or `api`/`url` is missing.
    #[instrument(fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .set_override_option("api", std::env::var("API").ok())
            .and_then(|b| b.set_override_option("url", std::env::var("URL").ok()))
            .and_then(|b| b.set_override_option("port", std::env::var("PORT").ok()))
            .and_then(|b| b.build())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;

        Self::from_config(config)
    }

    /// Deserializes and validates an already-assembled [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if required keys are missing or blank.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;
        parsed.validate()?;

        debug!(config = ?parsed, "Configuration loaded");
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::Blank("API key")));
        }
        if self.url.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::Blank("Endpoint URL")));
        }
        Ok(())
    }

    /// Overrides the listen address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Overrides the listen port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upstream timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parameters applied to every generation call.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            app_title: self.app_title.clone(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_app_title() -> String {
    DEFAULT_APP_TITLE.to_string()
}
