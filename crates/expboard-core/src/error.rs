//! Error types for expboard-core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpboardError {
    #[error("invalid unique name '{name}': expected {expected} dot-separated parts")]
    InvalidUniqueName { name: String, expected: usize },

    #[error("invalid group id '{0}' in unique name")]
    InvalidGroupId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExpboardError>;
