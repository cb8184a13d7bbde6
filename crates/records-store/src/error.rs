use thiserror::Error;

/// All errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The driver reported a connection or query failure.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A domain value could not be serialized into a BSON document.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),

    /// A connection setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the store crate.
pub type Result<T> = std::result::Result<T, StoreError>;
