//! Entries module - domain models, services, and traits.

mod entries_model;
mod entries_service;
mod entries_traits;



// Re-export the public interface
pub use entries_model::{Entry, EntryFilter, EntryStatus, EntryType};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
