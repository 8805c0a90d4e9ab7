use thiserror::Error;

/// Errors returned by message store operations.
///
/// A chat with no messages is not an error; queries return an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors related to store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid store limits: ceiling {ceiling}, floor {floor}")]
    InvalidLimits { ceiling: usize, floor: usize },
}

/// Errors from repository operations (used by trait definitions in catchat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}
