use log::debug;
use std::sync::Arc;

use super::entries_model::{Entry, EntryFilter, EntryStatus};
use super::entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing the entry lifecycle.
pub struct EntryService {
    repository: Arc<dyn EntryRepositoryTrait>,
}

impl EntryService {
    /// Creates a new EntryService instance
    pub fn new(repository: Arc<dyn EntryRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn require_id(entry: &Entry, operation: &str) -> Result<i64> {
        entry.id.ok_or_else(|| {
            Error::Precondition(format!(
                "cannot {} an entry that was never saved",
                operation
            ))
        })
    }
}

#[async_trait::async_trait]
impl EntryServiceTrait for EntryService {
    async fn save_entry(&self, entry: Entry) -> Result<Entry> {
        if entry.id.is_some() {
            return Err(Error::Precondition(
                "cannot save an entry that already has an id".to_string(),
            ));
        }
        entry.validate()?;

        let entry = Entry {
            status: entry.status.or(Some(EntryStatus::Pending)),
            ..entry
        };
        debug!("saving new entry for user {:?}", entry.user_id);
        self.repository.save(entry).await
    }

    async fn update_entry(&self, entry: Entry) -> Result<Entry> {
        Self::require_id(&entry, "update")?;
        entry.validate()?;
        self.repository.save(entry).await
    }

    async fn delete_entry(&self, entry: Entry) -> Result<()> {
        let entry_id = Self::require_id(&entry, "delete")?;
        debug!("deleting entry {}", entry_id);
        self.repository.delete(entry_id).await?;
        Ok(())
    }

    fn search_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        self.repository.find_by_filter(filter)
    }

    fn get_entry(&self, entry_id: i64) -> Result<Option<Entry>> {
        self.repository.find_by_id(entry_id)
    }

    async fn set_entry_status(&self, entry: Entry, status: EntryStatus) -> Result<Entry> {
        self.update_entry(Entry {
            status: Some(status),
            ..entry
        })
        .await
    }
}
