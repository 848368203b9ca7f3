use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Record service responded with status {0}")]
    Status(u16),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, OrgTableError>;
