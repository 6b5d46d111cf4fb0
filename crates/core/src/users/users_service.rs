use log::debug;
use std::sync::Arc;

use super::users_model::User;
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for user authentication and registration.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let user = self.repository.find_by_email(email)?.ok_or_else(|| {
            Error::Authentication("Usuario não encontrado para o email informado.".to_string())
        })?;

        if user.password != password {
            return Err(Error::Authentication("Senha Inválida.".to_string()));
        }

        Ok(user)
    }

    async fn register_user(&self, user: User) -> Result<User> {
        self.validate_email(&user.email)?;
        debug!("registering user {}", user.email);
        self.repository.save(user).await
    }

    fn validate_email(&self, email: &str) -> Result<()> {
        if self.repository.exists_by_email(email)? {
            return Err(Error::BusinessRule(
                "Já existe um usuário cadastrado com este email.".to_string(),
            ));
        }
        Ok(())
    }

    fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.repository.find_by_id(user_id)
    }
}
