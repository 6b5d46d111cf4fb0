//! Core error types for the Financas application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Business-rule and authentication failures carry the exact message shown to
/// the end user. Database-specific errors are wrapped in string form to keep
/// this type database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    /// A user-correctable input violation: field validation, duplicate email.
    #[error("{0}")]
    BusinessRule(String),

    /// Credential mismatch or unknown identity. Kept distinct from
    /// [`Error::BusinessRule`] so a presentation layer can map it to a
    /// different response code.
    #[error("{0}")]
    Authentication(String),

    /// A programming error: operating on a record in a lifecycle state that
    /// does not admit the operation, such as updating an entry that was never
    /// persisted. Not recoverable by user input.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate email).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}
