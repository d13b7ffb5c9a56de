use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error("Failed to read {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Record #{index} ({name}) is invalid: {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        source: serde_json::Error,
    },

    #[error("Org {org:?} is restricted for unknown ideology {token:?}")]
    UnknownIdeology { org: String, token: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, OrgError>;
