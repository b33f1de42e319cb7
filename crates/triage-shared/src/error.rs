//! Error types for ticket triage.
//!
//! Classification itself never fails. These errors come from the edges:
//! validating a submitted message and loading keyword rule tables.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid rules: {0}")]
    Rules(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TriageError {
    pub fn code(&self) -> i32 {
        match self {
            TriageError::InvalidInput(_) => -32602,
            TriageError::Rules(_) => -32010,
            TriageError::Io(_) => -32006,
            TriageError::Json(_) => -32700,
            TriageError::Toml(_) => -32011,
        }
    }
}
