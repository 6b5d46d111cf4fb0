//! Financas Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Financas: the entry
//! (lançamento) lifecycle with its validation rules, and user
//! authentication/registration. It is database-agnostic and defines
//! repository traits that are implemented by the `storage-sqlite` crate.

pub mod entries;
pub mod errors;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
