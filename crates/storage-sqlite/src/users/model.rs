//! Database models for users.

use chrono::NaiveDate;
use diesel::prelude::*;

use financas_core::users::User;

/// Database model for users
#[derive(Queryable, Identifiable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub recorded_at: NaiveDate,
}

/// Database model for inserting a new user
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUserRow {
    pub name: String,
    pub email: String,
    pub password: String,
    pub recorded_at: NaiveDate,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
            recorded_at: Some(row.recorded_at),
        }
    }
}

impl NewUserRow {
    /// Builds the insert row, stamping the registration date when absent.
    pub fn from_domain(user: User, today: NaiveDate) -> Self {
        Self {
            name: user.name,
            email: user.email,
            password: user.password,
            recorded_at: user.recorded_at.unwrap_or(today),
        }
    }
}
