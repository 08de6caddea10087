//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Implements the note and user repository ports over PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: driver failures map to the port error enums.
//!
//! # Example
//!
//! ```no_run
//! use notes_backend::outbound::persistence::{DbPool, DieselNoteRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), notes_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/notes")).await?;
//! let notes = DieselNoteRepository::new(pool);
//! # let _ = notes;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_note_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_note_repository::DieselNoteRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
