//! Classification of Diesel and pool failures shared by the repositories.
//!
//! Each repository turns a [`DieselFailure`] into its own port error; this
//! module only decides which bucket a raw failure belongs to and logs the
//! driver detail at debug level.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse classification of a Diesel error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DieselFailure {
    /// A unique constraint rejected the write.
    UniqueViolation { constraint: Option<String> },
    /// The server connection dropped mid-operation.
    Connection { message: String },
    /// Anything else.
    Query { message: String },
}

pub(super) fn classify_diesel_error(error: &DieselError, operation: &str) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                %operation,
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
            match kind {
                DatabaseErrorKind::UniqueViolation => DieselFailure::UniqueViolation {
                    constraint: info.constraint_name().map(str::to_owned),
                },
                DatabaseErrorKind::ClosedConnection => DieselFailure::Connection {
                    message: info.message().to_owned(),
                },
                _ => DieselFailure::Query {
                    message: info.message().to_owned(),
                },
            }
        }
        other => {
            debug!(%operation, error = %other, "diesel operation failed");
            DieselFailure::Query {
                message: other.to_string(),
            }
        }
    }
}

pub(super) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}
