//! Fleet domain service.
//!
//! Validation gate in front of [`SpaceshipRepository`]: names are required,
//! armament lists are de-duplicated, and status labels are normalised before
//! anything reaches storage.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    FleetCommand, FleetQuery, SpaceshipPayload, SpaceshipRepository, SpaceshipRepositoryError,
};
use crate::domain::spaceship::exceeds_text_limit;
use crate::domain::{
    ArmamentLoadout, Error, MAX_TEXT_CHARS, Spaceship, SpaceshipDraft, SpaceshipId,
    SpaceshipName, SpaceshipStatus, SpaceshipSummary, SpaceshipValidationError,
};

fn map_repository_error(error: SpaceshipRepositoryError) -> Error {
    match error {
        SpaceshipRepositoryError::NotFound { id } => {
            Error::not_found(format!("spaceship {id} not found"))
        }
        SpaceshipRepositoryError::Conflict { name } => {
            Error::conflict(format!("spaceship name {name} is already taken"))
                .with_details(json!({ "field": "name", "code": "name_taken" }))
        }
        SpaceshipRepositoryError::Connection { operation, message } => {
            Error::service_unavailable(format!(
                "spaceship store unavailable during {operation}: {message}"
            ))
        }
        SpaceshipRepositoryError::Storage { operation, message } => {
            Error::internal(format!("spaceship store error during {operation}: {message}"))
        }
        SpaceshipRepositoryError::Consistency { operation, message } => {
            error!(%operation, %message, "spaceship store invariant violated");
            Error::internal(format!("spaceship store inconsistency during {operation}"))
        }
    }
}

fn map_validation_error(error: SpaceshipValidationError) -> Error {
    let details = match error {
        SpaceshipValidationError::NameRequired => {
            json!({ "field": "name", "code": "name_required" })
        }
        SpaceshipValidationError::FieldTooLong { field } => {
            json!({ "field": field, "code": "too_long", "max": MAX_TEXT_CHARS })
        }
        SpaceshipValidationError::ArmamentTitleRequired { index } => {
            json!({ "field": "armament", "index": index, "code": "armament_title_required" })
        }
        SpaceshipValidationError::ArmamentTitleTooLong { index } => json!({
            "field": "armament",
            "index": index,
            "code": "too_long",
            "max": MAX_TEXT_CHARS,
        }),
    };
    Error::invalid_request(error.to_string()).with_details(details)
}

fn check_length(field: &'static str, value: &str) -> Result<(), SpaceshipValidationError> {
    if exceeds_text_limit(value) {
        return Err(SpaceshipValidationError::FieldTooLong { field });
    }
    Ok(())
}

fn draft_from_payload(
    payload: SpaceshipPayload,
) -> Result<SpaceshipDraft, SpaceshipValidationError> {
    let SpaceshipPayload {
        name,
        class,
        crew,
        image,
        value,
        status,
        armament,
    } = payload;

    let name = SpaceshipName::new(&name)?;
    check_length("class", &class)?;
    check_length("image", &image)?;
    let armament = ArmamentLoadout::try_from_pairs(
        armament
            .into_iter()
            .map(|entry| (entry.title, entry.quantity)),
    )?;

    Ok(SpaceshipDraft {
        name,
        class,
        crew,
        image,
        value,
        status: SpaceshipStatus::from_label(&status),
        armament,
    })
}

/// Fleet service implementing both fleet driving ports.
#[derive(Clone)]
pub struct FleetService<R> {
    spaceships: Arc<R>,
}

impl<R> FleetService<R> {
    /// Create a service over the given repository.
    pub fn new(spaceships: Arc<R>) -> Self {
        Self { spaceships }
    }
}

#[async_trait]
impl<R> FleetQuery for FleetService<R>
where
    R: SpaceshipRepository,
{
    async fn list_spaceships(&self) -> Result<Vec<SpaceshipSummary>, Error> {
        self.spaceships
            .list_summaries()
            .await
            .map_err(map_repository_error)
    }

    async fn get_spaceship(&self, id: SpaceshipId) -> Result<Spaceship, Error> {
        self.spaceships
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> FleetCommand for FleetService<R>
where
    R: SpaceshipRepository,
{
    async fn create_spaceship(&self, payload: SpaceshipPayload) -> Result<Spaceship, Error> {
        let draft = draft_from_payload(payload).map_err(map_validation_error)?;
        let created = self
            .spaceships
            .create(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(
            spaceship_id = %created.id,
            armaments = created.armament.len(),
            "spaceship created"
        );
        Ok(created)
    }

    async fn update_spaceship(
        &self,
        id: SpaceshipId,
        payload: SpaceshipPayload,
    ) -> Result<(), Error> {
        let draft = draft_from_payload(payload).map_err(map_validation_error)?;
        self.spaceships
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?;
        debug!(spaceship_id = %id, armaments = draft.armament.len(), "spaceship replaced");
        Ok(())
    }

    async fn delete_spaceship(&self, id: SpaceshipId) -> Result<(), Error> {
        self.spaceships
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "fleet_service_tests.rs"]
mod tests;
