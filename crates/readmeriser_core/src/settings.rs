//! Fixed parameters for every generation call.

use serde::{Deserialize, Serialize};

/// Default upstream model identifier.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";
/// Default system message.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a creative README generator.";
/// Default completion token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default `X-Title` header value.
pub const DEFAULT_APP_TITLE: &str = "README Generator";

/// Model parameters applied to every README request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Model identifier sent upstream
    #[serde(default = "default_model")]
    pub model: String,
    /// System message preceding the prompt
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Application name sent as `X-Title`
    #[serde(default = "default_app_title")]
    pub app_title: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            system_prompt: default_system_prompt(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            app_title: default_app_title(),
        }
    }
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
