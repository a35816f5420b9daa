// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Structural problems with the input that abort the whole analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input is not a JSON object")]
    NotAnObject,

    #[error("`{0}` is missing or not an array")]
    NotASequence(&'static str),

    #[error("`{0}` is empty (strict mode)")]
    EmptySection(&'static str),

    #[error("unknown revenue strategy: {0}")]
    UnknownStrategy(String),
}

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, SalesError>;

// Allow `?` on std::io::Error by converting to SalesError::Io with unknown path.
impl From<std::io::Error> for SalesError {
    fn from(source: std::io::Error) -> Self {
        SalesError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
