//! Error types for ReadmeRiser.
//!
//! Every error records the line and file where it was created. Generation
//! failures stay in [`GenerationResult`] and are rendered on the page.
//! Configuration and server failures roll up into [`ReadmeRiserError`] and
//! end the process.

mod config;
mod generation;
mod server;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use server::{ServerError, ServerErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ReadmeRiserErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Web server error
    Server(ServerError),
}

impl std::fmt::Display for ReadmeRiserErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadmeRiserErrorKind::Config(e) => write!(f, "{}", e),
            ReadmeRiserErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// ReadmeRiser error with kind discrimination.
#[derive(Debug)]
pub struct ReadmeRiserError(Box<ReadmeRiserErrorKind>);

impl ReadmeRiserError {
    /// Create a new error from a kind.
    pub fn new(kind: ReadmeRiserErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReadmeRiserErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ReadmeRiserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReadmeRiser Error: {}", self.0)
    }
}

impl std::error::Error for ReadmeRiserError {}

impl<T> From<T> for ReadmeRiserError
where
    T: Into<ReadmeRiserErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ReadmeRiser operations.
pub type ReadmeRiserResult<T> = std::result::Result<T, ReadmeRiserError>;
