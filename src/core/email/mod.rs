//! Email delivery for the waitlist
//!
//! - `service` sends mail through the Resend HTTP API
//! - `welcome` renders the welcome message sent after a signup

pub mod service;
pub mod welcome;

pub use service::{EmailError, EmailService, Notifier, OutgoingEmail};
pub use welcome::WelcomeEmail;
