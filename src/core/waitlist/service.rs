//! Waitlist submission service
//!
//! A submission is validated, appended to the store, placed by counting the stored
//! rows, and followed by a best-effort welcome email. The count is read after the
//! insert without a transaction, so concurrent signups may see overlapping positions.
//! The position is only used for messaging.

use std::sync::Arc;

use serde::Deserialize;

use crate::core::db::NewSignup;
use crate::core::db::repositories::{SignupRepositoryError, SignupStore};
use crate::core::email::{Notifier, WelcomeEmail};
use crate::core::validation::{ValidationError, non_empty, validate_email};

/// Number of signups that get early-bird pricing
pub const EARLY_BIRD_SPOTS: u64 = 100;

/// Waitlist service error types
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body")]
    InvalidBody,

    #[error("This email is already on the waitlist!")]
    DuplicateEmail,

    /// Detail is kept for logs; the message shown to callers is generic
    #[error("Failed to process request. Please try again.")]
    Persistence(String),
}

/// Signup submission as received from the landing page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Where a signup landed on the waitlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Total signups after the insert, inclusive
    pub position: u64,
    pub early_bird: bool,
    pub spots_left: u64,
}

impl Placement {
    pub fn from_position(position: u64) -> Self {
        Self {
            position,
            early_bird: position <= EARLY_BIRD_SPOTS,
            spots_left: EARLY_BIRD_SPOTS.saturating_sub(position),
        }
    }
}

/// Waitlist service
#[derive(Clone)]
pub struct WaitlistService {
    store: Arc<dyn SignupStore>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl WaitlistService {
    /// Create a service without email delivery
    pub fn new(store: Arc<dyn SignupStore>) -> Self {
        Self {
            store,
            notifier: None,
        }
    }

    /// Send welcome emails through `notifier`
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn has_notifier(&self) -> bool {
        self.notifier.is_some()
    }

    /// Add a signup to the waitlist
    pub async fn submit(&self, request: SignupRequest) -> Result<Placement, WaitlistError> {
        let email = validate_email(request.email.as_deref())?;

        let new_signup = NewSignup {
            name: non_empty(request.name),
            email,
            message: non_empty(request.message),
        };

        let signup = match self.store.insert(&new_signup).await {
            Ok(signup) => signup,
            Err(SignupRepositoryError::DuplicateEmail) => {
                tracing::warn!("Duplicate waitlist signup: {}", new_signup.email);
                return Err(WaitlistError::DuplicateEmail);
            }
            Err(err) => {
                tracing::error!("Failed to store waitlist signup: {}", err);
                return Err(WaitlistError::Persistence(err.to_string()));
            }
        };

        let position = match self.store.count().await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!("Failed to count waitlist signups: {}", err);
                0
            }
        };
        let placement = Placement::from_position(position);

        self.send_welcome(signup.email, signup.name.as_deref(), placement);

        Ok(placement)
    }

    /// Fire-and-forget welcome email. Delivery errors are logged and dropped here so
    /// a stored signup always reports success.
    fn send_welcome(&self, to: String, name: Option<&str>, placement: Placement) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };

        let email = WelcomeEmail::new(name, placement).render(&to);

        tokio::spawn(async move {
            if let Err(err) = notifier.send(&email).await {
                tracing::warn!("Failed to send welcome email to {}: {}", to, err);
            }
        });
    }
}
