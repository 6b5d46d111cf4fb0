use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::{exists, select};
use diesel::prelude::*;

use financas_core::users::{User, UserRepositoryTrait};
use financas_core::Result;

use super::model::{NewUserRow, UserRow};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn save(&self, user: User) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let row = NewUserRow::from_domain(user, Utc::now().date_naive());
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserRow::as_returning())
                    .get_result::<UserRow>(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(inserted))
            })
            .await
    }

    fn find_by_email(&self, user_email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let row = users
            .filter(email.eq(user_email))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(User::from))
    }

    fn exists_by_email(&self, user_email: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;

        let found = select(exists(users.filter(email.eq(user_email))))
            .get_result::<bool>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(found)
    }

    fn find_by_id(&self, user_id: i64) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let row = users
            .find(user_id)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(row.map(User::from))
    }
}
