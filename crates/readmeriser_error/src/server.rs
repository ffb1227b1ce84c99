//! Web server error types.

use derive_more::{Display, Error};

/// Specific error conditions for the web server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ServerErrorKind {
    /// Could not bind the listening socket.
    #[display("Failed to bind {addr}: {message}")]
    Bind {
        /// Address we tried to bind
        addr: String,
        /// Underlying I/O error text
        message: String,
    },
    /// The serve loop exited with an error.
    #[display("Server failed: {}", _0)]
    Serve(String),
    /// The HTML page could not be rendered.
    #[display("Template error: {}", _0)]
    Template(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The specific error kind.
    pub kind: ServerErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ServerError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
