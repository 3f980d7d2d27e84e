use thiserror::Error;

/// Error types for the compute crate. Aggregation itself is total over any
/// finite candidate set; only the upstream fetch can fail.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
