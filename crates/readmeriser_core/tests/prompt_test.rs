//! Tests for prompt construction and request assembly.

use readmeriser_core::{
    DEFAULT_DESCRIPTION, DEFAULT_NAME, GenerationSettings, ProjectDetails, Role, build_prompt,
    readme_request,
};

#[test]
fn test_blank_fields_use_defaults() {
    let prompt = build_prompt(&ProjectDetails::default());

    assert!(prompt.contains("- Project Name: Unnamed Project\n"));
    assert!(prompt.contains("- Description: No description provided.\n"));
    assert!(prompt.contains("- Features: \n"));
    assert!(prompt.contains("- Installation: \n"));
    assert!(prompt.contains("- Usage: \n"));
}

#[test]
fn test_empty_strings_are_blank() {
    let details = ProjectDetails::from_fields("", "", "", "", "");
    assert_eq!(details, ProjectDetails::default());

    let prompt = build_prompt(&details);
    assert!(prompt.contains(DEFAULT_NAME));
    assert!(prompt.contains(DEFAULT_DESCRIPTION));
}

#[test]
fn test_whitespace_only_is_blank() {
    let details = ProjectDetails::builder()
        .name("   ")
        .description("\t\n")
        .build()
        .expect("Valid details");

    let prompt = build_prompt(&details);
    assert!(prompt.contains("- Project Name: Unnamed Project"));
    assert!(prompt.contains("- Description: No description provided."));
}

#[test]
fn test_values_inserted_verbatim() {
    let details = ProjectDetails::from_fields(
        "  ferris-cli ",
        "A <crab> & friends {desc} tool",
        "fast, safe, 🦀",
        "cargo install ferris-cli",
        "ferris --help\nferris run",
    );

    let prompt = build_prompt(&details);
    assert!(prompt.contains("- Project Name:   ferris-cli \n"));
    assert!(prompt.contains("A <crab> & friends {desc} tool"));
    assert!(prompt.contains("- Features: fast, safe, 🦀\n"));
    assert!(prompt.contains("- Installation: cargo install ferris-cli\n"));
    assert!(prompt.contains("ferris --help\nferris run"));
    assert!(!prompt.contains(DEFAULT_NAME));
    assert!(!prompt.contains(DEFAULT_DESCRIPTION));
}

#[test]
fn test_prompt_is_deterministic() {
    let details = ProjectDetails::from_fields("a", "b", "c", "d", "e");
    assert_eq!(build_prompt(&details), build_prompt(&details));
}

#[test]
fn test_prompt_describes_readme_structure() {
    let prompt = build_prompt(&ProjectDetails::default());
    for section in ["badges", "features table", "Why Use It?", "Contributing", "footer"] {
        assert!(prompt.contains(section), "missing section: {}", section);
    }
}

#[test]
fn test_readme_request_uses_settings() {
    let details = ProjectDetails::from_fields("ferris", "", "", "", "");
    let settings = GenerationSettings::default();

    let request = readme_request(&details, &settings);

    assert_eq!(request.messages().len(), 2);
    assert_eq!(*request.messages()[0].role(), Role::System);
    assert_eq!(
        request.messages()[0].content(),
        "You are a creative README generator."
    );
    assert_eq!(*request.messages()[1].role(), Role::User);
    assert_eq!(request.messages()[1].content(), &build_prompt(&details));
    assert_eq!(*request.max_tokens(), Some(1500));
    assert_eq!(*request.temperature(), Some(0.7));
    assert_eq!(
        request.model().as_deref(),
        Some("meta-llama/llama-3.1-8b-instruct:free")
    );
    assert!(request.referer().is_none());
}

#[test]
fn test_readme_request_carries_custom_settings() {
    let details = ProjectDetails::from_fields("", "", "", "", "");
    let settings = GenerationSettings {
        model: "openai/gpt-4o-mini".to_string(),
        system_prompt: "Be terse.".to_string(),
        max_tokens: 64,
        temperature: 0.1,
        ..GenerationSettings::default()
    };

    let request = readme_request(&details, &settings).with_referer("https://readme.example/");

    assert_eq!(request.messages().len(), 2);
    assert_eq!(request.messages()[0].content(), "Be terse.");
    assert!(request.messages()[1].content().contains(DEFAULT_NAME));
    assert_eq!(*request.max_tokens(), Some(64));
    assert_eq!(*request.temperature(), Some(0.1));
    assert_eq!(request.model().as_deref(), Some("openai/gpt-4o-mini"));
    assert_eq!(request.referer().as_deref(), Some("https://readme.example/"));
}

#[test]
fn test_settings_deserialize_with_defaults() {
    let settings: GenerationSettings =
        serde_json::from_str(r#"{"model": "openai/gpt-4o-mini"}"#).expect("Valid settings");

    assert_eq!(settings.model, "openai/gpt-4o-mini");
    assert_eq!(settings.max_tokens, 1500);
    assert_eq!(settings.app_title, "README Generator");
}
