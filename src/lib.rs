//! User Registry - a small user-management REST API.
//!
//! Create, list, fetch, patch and delete user records, plus a plaintext
//! credential check, served over Axum with SeaORM persistence.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, merge logic and authentication result
//! - **services**: Application use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Authentication, Count, PartialUser, User, UserResponse};
pub use errors::{AppError, AppResult};
