//! Form payloads accepted by the web endpoints.

use readmeriser_core::ProjectDetails;
use serde::Deserialize;

/// Fields posted by the generate form. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub install: String,
    #[serde(default)]
    pub usage: String,
}

impl GenerateForm {
    /// Trims every field and maps blanks to `None`.
    pub fn into_details(self) -> ProjectDetails {
        ProjectDetails::from_fields(
            self.name.trim(),
            self.desc.trim(),
            self.features.trim(),
            self.install.trim(),
            self.usage.trim(),
        )
    }
}

/// Field posted by the download button.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadForm {
    pub readme_content: String,
}
