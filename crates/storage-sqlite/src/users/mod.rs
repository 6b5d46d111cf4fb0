//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{NewUserRow, UserRow};
pub use repository::UserRepository;
