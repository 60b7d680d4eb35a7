//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and repositories.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{CrudRepository, UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
