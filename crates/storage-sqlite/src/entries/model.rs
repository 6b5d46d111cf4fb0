//! Database models for entries.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use log::warn;
use rust_decimal::Decimal;

use financas_core::entries::{Entry, EntryStatus, EntryType};
use financas_core::errors::{Error, Result};

/// Database model for entries
#[derive(Queryable, Identifiable, AsChangeset, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryRow {
    pub id: i64,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: i64,
    pub amount: String,
    pub kind: String,
    pub status: String,
    pub recorded_at: NaiveDate,
}

/// Database model for inserting a new entry
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::entries)]
pub struct NewEntryRow {
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub user_id: i64,
    pub amount: String,
    pub kind: String,
    pub status: String,
    pub recorded_at: NaiveDate,
}

// The service validates entries before they reach the storage layer, so a
// missing field here is a programming error, not a business one.
fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        Error::Precondition(format!(
            "entry reached the storage layer without `{}`",
            field
        ))
    })
}

fn parse_amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|err| {
        warn!("stored amount '{}' is not a valid decimal: {}", value, err);
        Decimal::ZERO
    })
}

fn parse_enum<T: FromStr<Err = String>>(value: &str) -> Option<T> {
    match T::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Self {
            id: Some(row.id),
            description: Some(row.description),
            month: Some(row.month),
            year: Some(row.year),
            user_id: Some(row.user_id),
            amount: Some(parse_amount(&row.amount)),
            kind: parse_enum(&row.kind),
            status: parse_enum(&row.status),
            recorded_at: Some(row.recorded_at),
        }
    }
}

impl NewEntryRow {
    /// Builds the insert row, stamping the registration date when absent.
    pub fn from_domain(entry: Entry, today: NaiveDate) -> Result<Self> {
        Ok(Self {
            description: required(entry.description, "description")?,
            month: required(entry.month, "month")?,
            year: required(entry.year, "year")?,
            user_id: required(entry.user_id, "user_id")?,
            amount: required(entry.amount, "amount")?.to_string(),
            kind: required(entry.kind, "kind")?.as_str().to_string(),
            status: entry.status.unwrap_or_default().as_str().to_string(),
            recorded_at: entry.recorded_at.unwrap_or(today),
        })
    }
}

impl EntryRow {
    /// Builds the full row for an update, keeping `existing_recorded_at` when
    /// the caller did not carry the registration date along.
    pub fn from_domain(
        entry_id: i64,
        entry: Entry,
        existing_recorded_at: NaiveDate,
    ) -> Result<Self> {
        Ok(Self {
            id: entry_id,
            description: required(entry.description, "description")?,
            month: required(entry.month, "month")?,
            year: required(entry.year, "year")?,
            user_id: required(entry.user_id, "user_id")?,
            amount: required(entry.amount, "amount")?.to_string(),
            kind: required(entry.kind, "kind")?.as_str().to_string(),
            status: entry.status.unwrap_or_default().as_str().to_string(),
            recorded_at: entry.recorded_at.unwrap_or(existing_recorded_at),
        })
    }
}
