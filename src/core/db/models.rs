//! Database models for the waitlist
//!
//! This module defines the entity structs that map to PostgreSQL tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================================================
// Signup Model
// ============================================================================

/// A persisted waitlist entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Signup {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Signup data for insertion (without id and timestamp)
///
/// `email` must already be normalized; the unique index compares it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub name: Option<String>,
    pub email: String,
    pub message: Option<String>,
}

impl NewSignup {
    /// Materialize the row the store would return for this insert
    pub fn into_signup(self, id: Uuid, created_at: DateTime<Utc>) -> Signup {
        Signup {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}
