//! Generic OpenAI-compatible API client.
//!
//! This module provides a client for any API that follows the OpenAI chat
//! completions format. OpenRouter is the default target.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
