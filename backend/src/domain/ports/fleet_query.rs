//! Driving port for fleet read use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Spaceship, SpaceshipId, SpaceshipSummary};

/// Read-side fleet operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FleetQuery: Send + Sync {
    /// Summaries of every spaceship.
    async fn list_spaceships(&self) -> Result<Vec<SpaceshipSummary>, Error>;

    /// One spaceship with its armament loadout.
    async fn get_spaceship(&self, id: SpaceshipId) -> Result<Spaceship, Error>;
}
