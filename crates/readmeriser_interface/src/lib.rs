//! Trait interface for README generation backends.
//!
//! The web layer only talks to [`ReadmeDriver`], so tests and alternative
//! providers can stand in for the HTTP client.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use readmeriser_core::{GenerateRequest, GenerateResponse};
use readmeriser_error::GenerationResult;

/// A backend that turns a chat request into generated text.
#[async_trait]
pub trait ReadmeDriver: Send + Sync {
    /// Performs exactly one generation call.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error for a non-success status and an unexpected error
    /// for anything else that goes wrong. Implementations never retry.
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<GenerateResponse>;

    /// Provider name for logging.
    fn provider_name(&self) -> &str;

    /// Model used when the request does not name one.
    fn model_name(&self) -> &str;

    /// Generates and returns only the text of the first completion.
    async fn generate_text(&self, request: &GenerateRequest) -> GenerationResult<String> {
        self.generate(request).await.map(GenerateResponse::into_text)
    }
}
