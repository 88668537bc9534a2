use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorklaunchError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Storage at {location} is corrupt: {reason}")]
    StorageCorrupt { location: String, reason: String },

    #[error("Failed to launch {path}: {reason}")]
    Launch { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WorklaunchError>;
