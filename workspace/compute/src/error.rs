use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A referenced record does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// The WIP journal is not configured with a numbering sequence.
    /// This is the one blocking, user-facing configuration error.
    #[error("Please define a sequence on the WIP journal")]
    MissingWipSequence,

    /// An invoice is in a state the requested operation does not allow
    #[error("Invoice error: {0}")]
    Invoice(String),

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        ComputeError::DataFrame(error.to_string())
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
