//! SQLite storage implementation for entries.

mod model;
mod repository;

pub use model::{EntryRow, NewEntryRow};
pub use repository::EntryRepository;
