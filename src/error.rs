use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading and querying the decision store.
#[derive(Error, Debug)]
pub enum DecideError {
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    #[error("configuration file missing: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("invalid schema in {}: {}", path.display(), problems.join("; "))]
    InvalidSchema { path: PathBuf, problems: Vec<String> },

    #[error("duplicate {kind} '{key}' in {}", path.display())]
    DuplicateKey {
        path: PathBuf,
        kind: &'static str,
        key: String,
    },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("{0}")]
    Usage(String),
}

impl DecideError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DecideError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecideError>;
