use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LqlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The entry file could not be created. This aborts the write.
    #[error("Could not write entry {}: {}", path.display(), source)]
    EntryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text field would break the one-field-per-line file format.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No distillery at index {0}")]
    CategoryNotFound(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LqlError>;
