//! Request and response types for README generation.

use crate::{Message, TokenUsage};
use serde::{Deserialize, Serialize};

/// Provider-neutral chat generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Conversation, system message first.
    messages: Vec<Message>,
    /// Maximum tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model override; drivers fall back to their own model when unset
    model: Option<String>,
    /// Site URL sent upstream as `HTTP-Referer`
    referer: Option<String>,
}

impl GenerateRequest {
    /// Creates a request with every sampling parameter set.
    ///
    /// # Examples
    ///
    /// ```
    /// use readmeriser_core::{GenerateRequest, Message, Role};
    ///
    /// let request = GenerateRequest::new(
    ///     vec![Message::new(Role::User, "Write a README")],
    ///     1500,
    ///     0.7,
    ///     "openai/gpt-4o-mini",
    /// );
    /// assert_eq!(request.messages().len(), 1);
    /// assert!(request.referer().is_none());
    /// ```
    pub fn new(
        messages: Vec<Message>,
        max_tokens: u32,
        temperature: f32,
        model: impl Into<String>,
    ) -> Self {
        Self {
            messages,
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
            model: Some(model.into()),
            referer: None,
        }
    }

    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Returns a copy of this request with the referer set.
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }
}

/// Text produced by a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Content of the first completion, verbatim.
    text: String,
    /// Token accounting, when the provider reports it.
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Creates a response from generated text and optional usage.
    pub fn new(text: impl Into<String>, usage: Option<TokenUsage>) -> Self {
        Self {
            text: text.into(),
            usage,
        }
    }

    /// Consumes the response, returning the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
