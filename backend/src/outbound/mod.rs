//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **security**: bcrypt password hashing and JWT session signing
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod persistence;
pub mod security;
