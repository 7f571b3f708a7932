//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of domain repository ports backed by PostgreSQL
//! via Diesel, with async support through `diesel-async` and `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel errors are mapped to
//!   `ContactRepositoryError`.
//!
//! # Example
//!
//! ```no_run
//! use contacts::outbound::persistence::{
//!     DbPool, DieselContactRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/contacts";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repo = DieselContactRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
