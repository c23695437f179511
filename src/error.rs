use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinderError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Unknown kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, MinderError>;
