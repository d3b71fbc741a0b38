//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Email identity is case-insensitive: lookups compare `lower(email)` on both
//! sides and the `users_email_lower_key` unique index rejects a second
//! account whose email differs only by case.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, PasswordHash, User, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

diesel::define_sql_function! {
    /// PostgreSQL `lower(text)`.
    fn lower(value: Text) -> Text;
}

/// Diesel-backed implementation of the credential store port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(operation: &str, error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(operation, pool_error_message(error))
}

fn map_diesel_error(
    operation: &str,
    error: &diesel::result::Error,
    email: &EmailAddress,
) -> UserPersistenceError {
    match classify_diesel_error(error, operation) {
        DieselFailure::UniqueViolation { .. } => UserPersistenceError::conflict(email.as_str()),
        DieselFailure::Connection { message } => {
            UserPersistenceError::connection(operation, message)
        }
        DieselFailure::Query { message } => UserPersistenceError::query(operation, message),
    }
}

fn row_to_user(operation: &str, row: UserRow) -> Result<User, UserPersistenceError> {
    let email = EmailAddress::new(&row.email)
        .map_err(|_| UserPersistenceError::query(operation, "stored email is blank"))?;
    Ok(User {
        id: UserId::new(row.id),
        email,
        password_hash: PasswordHash::new(row.password_hash),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, UserPersistenceError> {
        const OPERATION: &str = "find user by email";
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;

        let row: Option<UserRow> = users::table
            .filter(lower(users::email).eq(lower(email.as_str())))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(OPERATION, &err, email))?;

        match row {
            Some(row) => row_to_user(OPERATION, row),
            None => Err(UserPersistenceError::not_found(email.as_str())),
        }
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        const OPERATION: &str = "create user";
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(OPERATION, err))?;

        let new_row = NewUserRow {
            email: user.email.as_str(),
            password_hash: user.password_hash.as_str(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        };
        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(OPERATION, &err, &user.email))?;

        row_to_user(OPERATION, row)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection() {
        let err = map_pool_error("create user", PoolError::checkout("connection refused"));
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn non_unique_diesel_errors_map_to_query() {
        let email = EmailAddress::new("a@b.c").expect("valid email");
        let err = map_diesel_error("create user", &diesel::result::Error::NotFound, &email);
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_users() {
        let now = Utc::now();
        let user = row_to_user(
            "find user by email",
            UserRow {
                id: 3,
                email: "Motti@Empire.gov".to_owned(),
                password_hash: "$2b$12$hash".to_owned(),
                created_at: now,
                updated_at: now,
            },
        )
        .expect("row converts");

        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.email.as_str(), "Motti@Empire.gov");
        assert_eq!(user.password_hash.as_str(), "$2b$12$hash");
    }
}
