//! Errors raised around the parser: reading configuration and outlet files,
//! writing results and joining worker tasks. Parsing itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Could not read or write '{path}'.\n{source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not deserialize.\n{0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HoursError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HoursError>;
