//! Driving port for fleet write use-cases.
//!
//! Payloads arrive unvalidated; the implementing service owns the
//! validation rules so every inbound adapter gets the same behaviour.

use async_trait::async_trait;

use crate::domain::{Error, Spaceship, SpaceshipId};

/// Raw armament entry as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmamentPayload {
    pub title: String,
    pub quantity: u32,
}

/// Raw spaceship content as submitted by a client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpaceshipPayload {
    pub name: String,
    pub class: String,
    pub crew: u32,
    pub image: String,
    pub value: f64,
    /// Free-text status; unrecognised values become `Undefined`.
    pub status: String,
    pub armament: Vec<ArmamentPayload>,
}

/// Write-side fleet operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FleetCommand: Send + Sync {
    /// Validate and persist a new spaceship.
    async fn create_spaceship(&self, payload: SpaceshipPayload) -> Result<Spaceship, Error>;

    /// Validate and fully replace an existing spaceship.
    async fn update_spaceship(&self, id: SpaceshipId, payload: SpaceshipPayload)
    -> Result<(), Error>;

    /// Remove a spaceship.
    async fn delete_spaceship(&self, id: SpaceshipId) -> Result<(), Error>;
}
