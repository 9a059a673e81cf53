use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfVoteError {
    #[error("Completion error: {0}")]
    Completion(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, SelfVoteError>;
