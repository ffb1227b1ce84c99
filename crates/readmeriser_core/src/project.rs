//! Project metadata collected from the form.

use serde::{Deserialize, Serialize};

/// The five free-text fields describing a project.
///
/// Every field is optional. A `None` or whitespace-only value is treated as
/// blank when the prompt is built.
///
/// # Examples
///
/// ```
/// use readmeriser_core::ProjectDetails;
///
/// let details = ProjectDetails::builder()
///     .name("ferris")
///     .usage("cargo run")
///     .build()
///     .unwrap();
///
/// assert_eq!(details.name().as_deref(), Some("ferris"));
/// assert!(details.description().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into, strip_option), default)]
pub struct ProjectDetails {
    /// Project name
    name: Option<String>,
    /// Short description
    description: Option<String>,
    /// Features, usually comma-separated
    features: Option<String>,
    /// Installation instructions
    installation: Option<String>,
    /// Usage instructions
    usage: Option<String>,
}

impl ProjectDetails {
    /// Returns a builder for constructing ProjectDetails.
    pub fn builder() -> ProjectDetailsBuilder {
        ProjectDetailsBuilder::default()
    }

    /// Builds details from raw field values, mapping empty strings to `None`.
    pub fn from_fields(
        name: impl Into<String>,
        description: impl Into<String>,
        features: impl Into<String>,
        installation: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: non_empty(name.into()),
            description: non_empty(description.into()),
            features: non_empty(features.into()),
            installation: non_empty(installation.into()),
            usage: non_empty(usage.into()),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
