//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types. Fleet invariants live in the domain services.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Every multi-statement write runs inside one transaction so readers
//!   never observe a partially written spaceship.
//!
//! ```ignore
//! use fleet_backend::outbound::persistence::{DbPool, PoolConfig, DieselSpaceshipRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/fleet")).await?;
//! let ships = DieselSpaceshipRepository::new(pool);
//! ```

mod armament_catalog;
mod diesel_error_mapping;
mod diesel_spaceship_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_spaceship_repository::DieselSpaceshipRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, apply_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
