//! Domain-level error type.
//!
//! Errors here are transport agnostic. The HTTP adapter maps them onto status
//! codes and JSON bodies; nothing in this module knows about actix.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// The write collides with an existing unique value.
    Conflict,
    /// A backing service (usually the database) is unreachable.
    ServiceUnavailable,
    /// An unexpected error or broken invariant inside the service.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use fleet_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("spaceship 7 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Validation errors emitted by [`Error::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
}

const FALLBACK_MESSAGE: &str = "unspecified error";

impl Error {
    /// Create a new error.
    ///
    /// A blank message is replaced with a generic fallback so construction
    /// never fails; use [`Error::try_new`] to reject blank input instead.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: FALLBACK_MESSAGE.to_owned(),
            details: None,
        })
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Machine-readable reason stored under `details.code`, when present.
    ///
    /// # Examples
    /// ```
    /// use fleet_backend::domain::Error;
    ///
    /// let err = Error::conflict("taken").with_reason("name_taken");
    /// assert_eq!(err.reason(), Some("name_taken"));
    /// ```
    pub fn reason(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|details| details.get("code"))
            .and_then(Value::as_str)
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a `{"code": reason}` details object.
    pub fn with_reason(self, reason: &str) -> Self {
        self.with_details(json!({ "code": reason }))
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_new_rejects_blank_messages() {
        let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
        assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
    }

    #[rstest]
    fn new_substitutes_fallback_for_blank_messages() {
        let err = Error::new(ErrorCode::InternalError, "");
        assert_eq!(err.message(), FALLBACK_MESSAGE);
    }

    #[rstest]
    #[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
    #[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
    #[case(Error::not_found("x"), ErrorCode::NotFound)]
    #[case(Error::conflict("x"), ErrorCode::Conflict)]
    #[case(Error::service_unavailable("x"), ErrorCode::ServiceUnavailable)]
    #[case(Error::internal("x"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    fn serialises_with_snake_case_code_and_details() {
        let err = Error::conflict("email already registered").with_reason("user_exists");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            value,
            json!({
                "code": "conflict",
                "message": "email already registered",
                "details": { "code": "user_exists" }
            })
        );
    }

    #[rstest]
    fn deserialising_blank_message_fails() {
        let result: Result<Error, _> =
            serde_json::from_value(json!({ "code": "not_found", "message": " " }));
        assert!(result.is_err());
    }

    #[rstest]
    fn reason_is_absent_without_details() {
        assert_eq!(Error::not_found("gone").reason(), None);
    }
}
