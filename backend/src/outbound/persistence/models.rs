//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{armaments, spaceship_armaments, spaceships, users};

// ---------------------------------------------------------------------------
// Spaceship models
// ---------------------------------------------------------------------------

/// Full spaceship row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = spaceships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpaceshipRow {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub value: f64,
    pub status: i16,
}

/// List-view projection of a spaceship row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = spaceships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpaceshipSummaryRow {
    pub id: i64,
    pub name: String,
    pub status: i16,
}

/// Scalar spaceship columns, used for both insert and full replacement.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = spaceships)]
pub(crate) struct SpaceshipFields<'a> {
    pub name: &'a str,
    pub class: &'a str,
    pub crew: i64,
    pub image: &'a str,
    pub value: f64,
    pub status: i16,
}

// ---------------------------------------------------------------------------
// Armament catalogue models
// ---------------------------------------------------------------------------

/// Catalogue row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = armaments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ArmamentRow {
    pub id: i64,
    pub title: String,
}

/// Insertable catalogue entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = armaments)]
pub(crate) struct NewArmamentRow<'a> {
    pub title: &'a str,
}

/// Insertable quantity link.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = spaceship_armaments)]
pub(crate) struct NewSpaceshipArmamentRow {
    pub spaceship_id: i64,
    pub armament_id: i64,
    pub quantity: i64,
}

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
