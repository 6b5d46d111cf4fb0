//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::User;
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Inserts a new user and returns the stored record with its assigned id.
    async fn save(&self, user: User) -> Result<User>;

    /// Looks a user up by email. Absence is a normal outcome.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Returns whether any persisted user carries `email`.
    fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Retrieves a user by id. Absence is a normal outcome.
    fn find_by_id(&self, user_id: i64) -> Result<Option<User>>;
}

/// Trait defining the contract for user authentication and registration.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Verifies the credentials and returns the matching user.
    fn authenticate(&self, email: &str, password: &str) -> Result<User>;

    /// Registers a new user after checking that the email is not taken.
    async fn register_user(&self, user: User) -> Result<User>;

    /// Fails with a business-rule error when `email` is already registered;
    /// succeeds silently otherwise. The check is check-then-act: the unique
    /// index at the storage boundary is the authoritative backstop under
    /// concurrent registration.
    fn validate_email(&self, email: &str) -> Result<()>;

    /// Retrieves a user by id. `Ok(None)` when absent.
    fn get_user(&self, user_id: i64) -> Result<Option<User>>;
}
