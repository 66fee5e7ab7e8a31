//! Error types for the CI wrapper
//!
//! Every failure ends the run; the exit code of a failed external invocation
//! is preserved so CI sees the tool's own status.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the CI wrapper
#[derive(Error, Debug)]
pub enum Error {
    // === Tool Errors ===
    #[error("'{name}' not found on PATH. Install the .NET SDK or set 'tool' in vstest-ci.toml")]
    ToolNotFound { name: String },

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    // === Invocation Errors ===
    #[error("'{command}' failed with exit code {code}")]
    InvocationFailed { command: String, code: i32 },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Process exit code to report for this error
    ///
    /// A failed external invocation propagates the tool's own exit code;
    /// everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvocationFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
