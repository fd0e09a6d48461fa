use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the snippet store and the placeholder resolver
#[derive(Debug, Error)]
pub enum SnippetError {
    /// Empty title/group, or a reference to a group that does not exist
    #[error("{0}")]
    Validation(String),

    /// The snippet or group the operation targets is gone
    #[error("{0}")]
    NotFound(String),

    /// Malformed JSON/YAML, or a payload that breaks the document invariants
    #[error("invalid snippet data: {0}")]
    Format(String),

    /// The user abandoned a required prompt
    #[error("operation cancelled")]
    Cancelled,

    /// The terminal could not be prompted (no TTY, closed stdin, ...)
    #[error("terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnippetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnippetError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SnippetError::Cancelled)
    }
}

impl From<serde_json::Error> for SnippetError {
    fn from(err: serde_json::Error) -> Self {
        SnippetError::Format(err.to_string())
    }
}

impl From<serde_yaml::Error> for SnippetError {
    fn from(err: serde_yaml::Error) -> Self {
        SnippetError::Format(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
