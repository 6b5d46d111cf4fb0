//! Users module - domain models, services, and traits.

mod users_model;
mod users_service;
mod users_traits;

#[cfg(test)]
mod users_model_tests;


// Re-export the public interface
pub use users_model::User;
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
