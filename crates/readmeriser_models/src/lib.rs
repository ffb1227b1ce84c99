//! Chat-completion provider integrations for ReadmeRiser.

#![forbid(unsafe_code)]

mod openai_compat;

pub use openai_compat::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage,
    OpenAICompatibleClient, from_chat_response, to_chat_request,
};
