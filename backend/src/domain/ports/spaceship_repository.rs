//! Driven port for spaceship persistence.
//!
//! Adapters own the relational layout (ship rows, the shared armament
//! catalogue, and quantity links). Callers only rely on the contract below:
//! every write is atomic and armament lists use set-replacement semantics.

use async_trait::async_trait;

use crate::domain::{Spaceship, SpaceshipDraft, SpaceshipId, SpaceshipSummary};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by spaceship repository adapters.
    pub enum SpaceshipRepositoryError {
        /// No spaceship has the requested identifier.
        NotFound { id: i64 } => "spaceship {id} not found",
        /// Another spaceship already uses the name.
        Conflict { name: String } => "spaceship name {name} is already taken",
        /// A connection could not be obtained.
        Connection { operation: String, message: String } =>
            "{operation}: spaceship store connection failed: {message}",
        /// A query or mutation failed during execution.
        Storage { operation: String, message: String } =>
            "{operation}: spaceship store query failed: {message}",
        /// Stored data broke an invariant the adapter relies on.
        Consistency { operation: String, message: String } =>
            "{operation}: spaceship store inconsistency: {message}",
    }
}

/// Spaceship storage contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpaceshipRepository: Send + Sync {
    /// Identity, name, and status of every spaceship, ordered by id.
    async fn list_summaries(&self) -> Result<Vec<SpaceshipSummary>, SpaceshipRepositoryError>;

    /// Full record including the armament loadout.
    async fn find_by_id(&self, id: SpaceshipId) -> Result<Spaceship, SpaceshipRepositoryError>;

    /// Persist a new spaceship together with its armament links.
    async fn create(&self, draft: &SpaceshipDraft) -> Result<Spaceship, SpaceshipRepositoryError>;

    /// Replace scalar fields and the entire armament link set.
    async fn update(
        &self,
        id: SpaceshipId,
        draft: &SpaceshipDraft,
    ) -> Result<(), SpaceshipRepositoryError>;

    /// Remove the spaceship and its links; catalogue entries remain.
    async fn delete(&self, id: SpaceshipId) -> Result<(), SpaceshipRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn messages_carry_operation_context() {
        let err = SpaceshipRepositoryError::storage("update spaceship", "deadlock detected");
        assert_eq!(
            err.to_string(),
            "update spaceship: spaceship store query failed: deadlock detected"
        );
        assert_eq!(err.kind(), "Storage");
    }

    #[rstest]
    fn not_found_names_the_identifier() {
        assert_eq!(
            SpaceshipRepositoryError::not_found(42_i64).to_string(),
            "spaceship 42 not found"
        );
    }
}
