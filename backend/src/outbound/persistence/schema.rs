//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Spaceship records. `name` carries the `spaceships_name_key` unique
    /// constraint.
    spaceships (id) {
        id -> Int8,
        name -> Varchar,
        class -> Varchar,
        crew -> Int8,
        image -> Varchar,
        value -> Float8,
        /// 0 = Undefined, 1 = Operational, 2 = Damaged.
        status -> Int2,
    }
}

diesel::table! {
    /// Shared armament catalogue; `title` is the natural key.
    armaments (id) {
        id -> Int8,
        title -> Varchar,
    }
}

diesel::table! {
    /// Quantity links between spaceships and catalogue entries.
    spaceship_armaments (spaceship_id, armament_id) {
        spaceship_id -> Int8,
        armament_id -> Int8,
        quantity -> Int8,
    }
}

diesel::table! {
    /// Registered accounts. Email uniqueness is enforced on `lower(email)`.
    users (id) {
        id -> Int8,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(spaceship_armaments -> spaceships (spaceship_id));
diesel::joinable!(spaceship_armaments -> armaments (armament_id));

diesel::allow_tables_to_appear_in_same_query!(armaments, spaceship_armaments, spaceships, users);
