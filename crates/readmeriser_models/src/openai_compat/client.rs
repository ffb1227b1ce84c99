//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use async_trait::async_trait;
use readmeriser_core::{DEFAULT_APP_TITLE, GenerateRequest, GenerateResponse};
use readmeriser_error::{
    ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind, GenerationResult,
};
use readmeriser_interface::ReadmeDriver;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Generic client for any OpenAI-compatible chat completions endpoint.
///
/// Works with OpenRouter, OpenAI, Groq and other providers that accept the
/// `{model, messages, max_tokens, temperature}` payload.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider_name: &'static str,
    app_title: String,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client with no request timeout.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token for authentication
    /// * `model` - Model identifier used when a request names none
    /// * `endpoint` - Full chat completions URL
    /// * `provider_name` - Name of the provider (for logging/tracing)
    #[instrument(skip(api_key), fields(provider = provider_name, model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        endpoint: String,
        provider_name: &'static str,
    ) -> Self {
        debug!(
            provider = provider_name,
            model = %model,
            url = %endpoint,
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint,
            provider_name,
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }

    /// Sets the value sent in the `X-Title` header.
    pub fn with_app_title(mut self, app_title: impl Into<String>) -> Self {
        self.app_title = app_title.into();
        self
    }

    /// Rebuilds the HTTP client with a total request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::HttpClient(e.to_string())))?;
        debug!(timeout_secs = timeout.as_secs(), "Applied request timeout");
        Ok(self)
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one chat completion request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::Http`] for a non-success status and
    /// [`GenerationErrorKind::Unexpected`] for network, parsing, or
    /// missing-field failures.
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    pub async fn complete(&self, req: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        let chat_request = conversions::to_chat_request(req, &self.model)?;

        debug!(
            provider = self.provider_name,
            model = %chat_request.model(),
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Title", &self.app_title)
            .json(&chat_request);
        if let Some(referer) = req.referer() {
            request = request.header("HTTP-Referer", referer);
        }

        let response = request.send().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "HTTP request failed");
            GenerationError::new(GenerationErrorKind::Unexpected(error_chain(&e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %body,
                "API error"
            );

            return Err(GenerationError::new(GenerationErrorKind::Http {
                status: status.as_u16(),
                body,
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to read response body");
            GenerationError::new(GenerationErrorKind::Unexpected(error_chain(&e)))
        })?;

        let chat_response: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::Unexpected(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            "Received response"
        );

        let generated = conversions::from_chat_response(&chat_response)?;
        if let Some(usage) = generated.usage() {
            debug!(
                input_tokens = usage.input_tokens(),
                output_tokens = usage.output_tokens(),
                total_tokens = usage.total_tokens(),
                "Token usage"
            );
        }
        Ok(generated)
    }
}

#[async_trait]
impl ReadmeDriver for OpenAICompatibleClient {
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<GenerateResponse> {
        self.complete(request).await
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Renders an error and its sources, e.g. `error sending request: connection refused`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
