use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use financas_core::entries::{Entry, EntryFilter, EntryRepositoryTrait};
use financas_core::Result;

use super::model::{EntryRow, NewEntryRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::entries;
use crate::schema::entries::dsl::*;

/// Repository for managing entry data in the database
pub struct EntryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EntryRepository {
    /// Creates a new EntryRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl EntryRepositoryTrait for EntryRepository {
    async fn save(&self, entry: Entry) -> Result<Entry> {
        self.writer
            .exec(move |conn| match entry.id {
                Some(entry_id) => {
                    let existing = entries
                        .find(entry_id)
                        .select(EntryRow::as_select())
                        .first::<EntryRow>(conn)
                        .map_err(StorageError::from)?;

                    let row = EntryRow::from_domain(entry_id, entry, existing.recorded_at)?;
                    diesel::update(entries.find(entry_id))
                        .set(&row)
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    Ok(Entry::from(row))
                }
                None => {
                    let row = NewEntryRow::from_domain(entry, Utc::now().date_naive())?;
                    let inserted = diesel::insert_into(entries::table)
                        .values(&row)
                        .returning(EntryRow::as_returning())
                        .get_result::<EntryRow>(conn)
                        .map_err(StorageError::from)?;

                    Ok(Entry::from(inserted))
                }
            })
            .await
    }

    async fn delete(&self, entry_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(entries.find(entry_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn find_by_id(&self, entry_id: i64) -> Result<Option<Entry>> {
        let mut conn = get_connection(&self.pool)?;

        let row = entries
            .find(entry_id)
            .select(EntryRow::as_select())
            .first::<EntryRow>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(Entry::from))
    }

    fn find_by_filter(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = entries::table.into_boxed();

        if let Some(filter_user) = filter.user_id {
            query = query.filter(user_id.eq(filter_user));
        }
        if let Some(term) = &filter.description {
            query = query.filter(description.like(format!("%{}%", term)));
        }
        if let Some(filter_month) = filter.month {
            query = query.filter(month.eq(filter_month));
        }
        if let Some(filter_year) = filter.year {
            query = query.filter(year.eq(filter_year));
        }
        if let Some(filter_kind) = filter.kind {
            query = query.filter(kind.eq(filter_kind.as_str()));
        }
        if let Some(filter_status) = filter.status {
            query = query.filter(status.eq(filter_status.as_str()));
        }

        let rows = query
            .select(EntryRow::as_select())
            .order(id.asc())
            .load::<EntryRow>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Entry::from).collect())
    }
}
