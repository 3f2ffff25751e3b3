//! Signup repository for database operations
//!
//! Appends waitlist entries and counts them. Uniqueness on email is enforced by the
//! table's unique index, so inserts never pre-check for an existing row.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::db::models::{NewSignup, Signup};

/// SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Signup repository error types
#[derive(Debug, thiserror::Error)]
pub enum SignupRepositoryError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for SignupRepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && (db_err.is_unique_violation()
                || db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
        {
            return Self::DuplicateEmail;
        }

        Self::DatabaseError(err)
    }
}

/// Persistent table of signups with a uniqueness constraint on email
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Insert one signup. A taken email yields [`SignupRepositoryError::DuplicateEmail`].
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, SignupRepositoryError>;

    /// Total number of stored signups
    async fn count(&self) -> Result<u64, SignupRepositoryError>;
}

/// PostgreSQL-backed signup repository
#[derive(Clone)]
pub struct SignupRepository {
    pool: PgPool,
}

impl SignupRepository {
    /// Create a new signup repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignupStore for SignupRepository {
    #[tracing::instrument(name = "Insert waitlist signup", skip(self, signup))]
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, SignupRepositoryError> {
        let signup = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO waitlist (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&signup.name)
        .bind(&signup.email)
        .bind(&signup.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(signup)
    }

    async fn count(&self) -> Result<u64, SignupRepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0.max(0) as u64)
    }
}
