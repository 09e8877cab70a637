use thiserror::Error;

/// Errors raised while reading or writing the persisted idea list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read stored ideas: {0}")]
    Read(String),

    #[error("failed to write stored ideas: {0}")]
    Write(String),

    /// A value exists under the key but is not a valid idea list.
    #[error("stored ideas are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
