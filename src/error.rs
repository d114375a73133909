use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo text is empty")]
    EmptyText,

    #[error("A todo with this text already exists: {0}")]
    Duplicate(String),

    #[error("Todo not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
