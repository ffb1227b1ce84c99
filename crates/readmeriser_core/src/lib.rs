//! Core data types for ReadmeRiser.
//!
//! This crate holds the project metadata collected from the form, the
//! provider-neutral request and response types, and the prompt builder that
//! turns one into the other.

mod message;
mod observability;
mod project;
mod prompt;
mod request;
mod role;
mod settings;
mod token_usage;

pub use message::{Message, MessageBuilder};
pub use observability::{LogFormat, init_tracing};
pub use project::{ProjectDetails, ProjectDetailsBuilder};
pub use prompt::{DEFAULT_DESCRIPTION, DEFAULT_NAME, build_prompt, readme_request};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use settings::{
    DEFAULT_APP_TITLE, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_TEMPERATURE, GenerationSettings,
};
pub use token_usage::TokenUsage;
