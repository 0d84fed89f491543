use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal failures of a single conversion. None of them is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{codec} compression failed: {message}")]
    Compression { codec: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn compression(codec: &str, message: impl ToString) -> Self {
        Error::Compression {
            codec: codec.to_string(),
            message: message.to_string(),
        }
    }
}
