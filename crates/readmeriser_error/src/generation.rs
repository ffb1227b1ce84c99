//! Errors from a single README generation call.

/// Ways a call to the chat-completion endpoint can fail.
///
/// The display text of each variant is what the user sees in place of a
/// preview, so it carries no source location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Upstream answered with a non-success status.
    #[display("HTTP Error: {status} - {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Network failure, malformed JSON, or a response missing its content.
    #[display("Unexpected Error: {_0}")]
    Unexpected(String),
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use readmeriser_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Http {
///     status: 401,
///     body: "unauthorized".to_string(),
/// });
/// assert!(err.kind().to_string().contains("HTTP Error: 401"));
/// assert!(err.is_http());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }

    /// Upstream status code, if the failure was an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            GenerationErrorKind::Http { status, .. } => Some(status),
            GenerationErrorKind::Unexpected(_) => None,
        }
    }

    /// Whether upstream refused the request with a non-success status.
    pub fn is_http(&self) -> bool {
        self.status().is_some()
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

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Outcome of one generation: the markdown text, or why there is none.
pub type GenerationResult<T> = Result<T, GenerationError>;
