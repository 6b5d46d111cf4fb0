//! SQLite storage implementation for Financas.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `financas-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for entries and users
//! - Database-specific row types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `financas-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod entries;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from financas-core for convenience
pub use financas_core::errors::{DatabaseError, Error, Result};
