//! Identity domain service: registration and authentication.
//!
//! The service owns the credential rules. Storage, hashing, and the clock are
//! injected so each rule can be exercised without I/O.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    LoginRequest, LoginService, PasswordHashError, PasswordHasher, RegistrationRequest,
    RegistrationService, UserPersistenceError, UserRepository,
};
use crate::domain::{
    CredentialValidationError, EmailAddress, Error, LoginCredentials, NewUser, Registration,
    SessionClaims,
};

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::NotFound { email } => {
            Error::not_found(format!("no user registered for {email}"))
        }
        UserPersistenceError::Conflict { email } => user_exists(&email),
        UserPersistenceError::Connection { operation, message } => Error::service_unavailable(
            format!("user store unavailable during {operation}: {message}"),
        ),
        UserPersistenceError::Query { operation, message } => {
            Error::internal(format!("user store error during {operation}: {message}"))
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    match error {
        PasswordHashError::TooLong { .. } => {
            map_validation_error(CredentialValidationError::PasswordTooLong)
        }
        other => Error::internal(other.to_string()),
    }
}

fn map_validation_error(error: CredentialValidationError) -> Error {
    let code = match error {
        CredentialValidationError::RequiredFields => "required_fields",
        CredentialValidationError::PasswordMismatch => "password_mismatch",
        CredentialValidationError::PasswordTooLong => "password_too_long",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "code": code }))
}

fn user_exists(email: &str) -> Error {
    Error::conflict(format!("user {email} already exists"))
        .with_details(json!({ "field": "email", "code": "user_exists" }))
}

fn password_wrong() -> Error {
    Error::unauthorized("password is incorrect").with_details(json!({ "code": "password_wrong" }))
}

/// Identity service implementing the registration and login driving ports.
#[derive(Clone)]
pub struct IdentityService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<U, H> IdentityService<U, H> {
    /// Create a service over the credential store, hasher, and clock.
    pub fn new(users: Arc<U>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }
}

impl<U, H> IdentityService<U, H>
where
    U: UserRepository,
{
    async fn ensure_email_available(&self, email: &EmailAddress) -> Result<(), Error> {
        match self.users.find_by_email(email).await {
            Ok(_) => Err(user_exists(email.as_str())),
            Err(UserPersistenceError::NotFound { .. }) => Ok(()),
            Err(other) => Err(map_persistence_error(other)),
        }
    }
}

#[async_trait]
impl<U, H> RegistrationService for IdentityService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: &RegistrationRequest) -> Result<SessionClaims, Error> {
        let registration =
            Registration::try_from_parts(&request.email, &request.password, &request.repassword)
                .map_err(map_validation_error)?;

        self.ensure_email_available(registration.email()).await?;

        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_hash_error)?;

        let now = self.clock.utc();
        let new_user = NewUser::stamped(registration.email().clone(), password_hash, now);
        let user = self.users.create(&new_user).await.map_err(|err| {
            if matches!(err, UserPersistenceError::Conflict { .. }) {
                warn!(error_kind = err.kind(), "registration lost a concurrent race");
            }
            map_persistence_error(err)
        })?;

        info!(user_id = %user.id, "user registered");
        Ok(SessionClaims::issue(&user.email, now))
    }
}

#[async_trait]
impl<U, H> LoginService for IdentityService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, request: &LoginRequest) -> Result<SessionClaims, Error> {
        let credentials = LoginCredentials::try_from_parts(&request.email, &request.password)
            .map_err(map_validation_error)?;

        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_persistence_error)?;

        let matches = self
            .hasher
            .verify(credentials.password(), &user.password_hash)
            .await
            .map_err(map_hash_error)?;
        if !matches {
            return Err(password_wrong());
        }

        Ok(SessionClaims::issue(&user.email, self.clock.utc()))
    }
}

#[cfg(test)]
#[path = "identity_service_tests.rs"]
mod tests;
