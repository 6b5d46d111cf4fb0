//! Entry repository and service traits.
//!
//! These traits define the contract for entry operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::entries_model::{Entry, EntryFilter, EntryStatus};
use crate::errors::Result;

/// Trait defining the contract for Entry repository operations.
///
/// Implementations of this trait handle the persistence of entry data.
/// The trait is database-agnostic - storage-specific details are handled
/// by concrete implementations.
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    /// Persists an entry: inserts when `id` is `None`, updates otherwise.
    ///
    /// Returns the stored record with its assigned id.
    async fn save(&self, entry: Entry) -> Result<Entry>;

    /// Deletes an entry by its id.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, entry_id: i64) -> Result<usize>;

    /// Retrieves an entry by its id. Absence is a normal outcome.
    fn find_by_id(&self, entry_id: i64) -> Result<Option<Entry>>;

    /// Retrieves the ordered sequence of entries matching the populated
    /// fields of `filter`.
    fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;
}

/// Trait defining the contract for Entry service operations.
///
/// The service layer enforces the business rules and lifecycle preconditions
/// before delegating to the repository.
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    /// Validates and persists a new entry. The entry must not carry an id;
    /// its status defaults to [`EntryStatus::Pending`] when unset.
    async fn save_entry(&self, entry: Entry) -> Result<Entry>;

    /// Re-validates and persists an already-saved entry. The entry must
    /// carry an id.
    async fn update_entry(&self, entry: Entry) -> Result<Entry>;

    /// Deletes an already-saved entry. The entry must carry an id; its
    /// content is not re-validated.
    async fn delete_entry(&self, entry: Entry) -> Result<()>;

    /// Returns the entries matching `filter`, in stable order.
    fn search_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Retrieves an entry by id. `Ok(None)` when absent.
    fn get_entry(&self, entry_id: i64) -> Result<Option<Entry>>;

    /// Persists `entry` with `status`, routing through [`update_entry`].
    ///
    /// [`update_entry`]: EntryServiceTrait::update_entry
    async fn set_entry_status(&self, entry: Entry, status: EntryStatus) -> Result<Entry>;
}
