//! Type conversions between ReadmeRiser and OpenAI formats.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse};
use readmeriser_core::{GenerateRequest, GenerateResponse, TokenUsage};
use readmeriser_error::{GenerationError, GenerationErrorKind};

/// Converts a GenerateRequest to OpenAI chat format.
///
/// The request's model wins over `default_model`.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> Result<ChatRequest, GenerationError> {
    let messages: Vec<ChatMessage> = req
        .messages()
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    let model = req
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let mut builder = ChatRequest::builder();
    builder
        .model(model)
        .messages(messages)
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature());

    builder.build().map_err(|e| {
        GenerationError::new(GenerationErrorKind::Unexpected(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Extracts the first completion from an OpenAI chat response.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, GenerationError> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::Unexpected(
                "No choices in response".to_string(),
            ))
        })?;

    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsage::new(input, output, total)),
            _ => None,
        }
    });

    Ok(GenerateResponse::new(text, usage))
}
