//! Configuration and startup error types.

/// Reasons the server cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source (file or environment) could not be read or merged.
    #[display("Failed to read configuration: {_0}")]
    Read(String),
    /// Merged values do not deserialize, e.g. a missing key or a bad port.
    #[display("Invalid configuration: {_0}")]
    Invalid(String),
    /// A required value is present but blank.
    #[display("{_0} is empty")]
    Blank(&'static str),
    /// The HTTP client could not be constructed.
    #[display("Failed to build HTTP client: {_0}")]
    HttpClient(String),
    /// A global tracing subscriber was already installed.
    #[display("Failed to install tracing subscriber: {_0}")]
    Tracing(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use readmeriser_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Blank("Endpoint URL"));
/// assert_eq!(err.kind().to_string(), "Endpoint URL is empty");
/// assert!(err.to_string().starts_with("Configuration Error: Endpoint URL is empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }

    /// Line where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl<T> From<T> for ConfigError
where
    T: Into<ConfigErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
