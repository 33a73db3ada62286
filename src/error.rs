use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("invalid data: {0}")]
    Invalid(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid logger config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already set: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
