//! Database repositories for the waitlist
//!
//! Repositories encapsulate data access logic and provide a clean API for
//! business logic to interact with the database.

pub mod signup;

pub use signup::{SignupRepository, SignupRepositoryError, SignupStore};
