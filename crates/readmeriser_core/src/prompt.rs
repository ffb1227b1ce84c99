//! Prompt construction for README generation.

use crate::{GenerateRequest, GenerationSettings, Message, ProjectDetails, Role};
use tracing::{debug, instrument};

/// Placeholder used when the project has no name.
pub const DEFAULT_NAME: &str = "Unnamed Project";
/// Placeholder used when the project has no description.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Builds the instruction text sent to the model.
///
/// Blank fields fall back to [`DEFAULT_NAME`], [`DEFAULT_DESCRIPTION`], or an
/// empty string. Non-blank values are inserted verbatim.
///
/// # Examples
///
/// ```
/// use readmeriser_core::{ProjectDetails, build_prompt};
///
/// let prompt = build_prompt(&ProjectDetails::default());
/// assert!(prompt.contains("- Project Name: Unnamed Project"));
/// assert!(prompt.contains("- Description: No description provided."));
/// ```
pub fn build_prompt(details: &ProjectDetails) -> String {
    let name = field_or(details.name(), DEFAULT_NAME);
    let desc = field_or(details.description(), DEFAULT_DESCRIPTION);
    let features = field_or(details.features(), "");
    let install = field_or(details.installation(), "");
    let usage = field_or(details.usage(), "");

    format!(
        "
You are an expert at creating professional, eye-catching README.md files for GitHub projects.

Generate a README in Markdown format based on the following inputs. If any fields are missing or empty, skip them or generate reasonable defaults.

- Project Name: {name}
- Description: {desc}
- Features: {features}
- Installation: {install}
- Usage: {usage}

Include:
- A header with the project name, tagline, and badges (MIT license, stars, build status from shields.io)
- A fun intro section
- A features table with emojis (if features provided)
- Installation and usage sections with code blocks (if provided)
- 'Why Use It?' bullets
- 'Contributing' section
- Playful footer with social links placeholder

Use clear headings, clean Markdown, and plenty of emojis (🚀✨🔧🌟).
"
    )
}

/// Builds the full chat request for a project: system message, then prompt.
#[instrument(skip_all, fields(model = %settings.model))]
pub fn readme_request(details: &ProjectDetails, settings: &GenerationSettings) -> GenerateRequest {
    let prompt = build_prompt(details);
    debug!(prompt_len = prompt.len(), "Built README prompt");

    GenerateRequest::new(
        vec![
            Message::new(Role::System, settings.system_prompt.clone()),
            Message::new(Role::User, prompt),
        ],
        settings.max_tokens,
        settings.temperature,
        settings.model.clone(),
    )
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}
