//! Waitlist signups
//!
//! - `service` validates, stores and places a signup, then sends the welcome email
//! - `api` exposes the flow at `/api/waitlist`

pub mod api;
pub mod service;
#[cfg(test)]
pub(crate) mod testing;

pub use api::{JoinResponse, waitlist_router};
pub use service::{EARLY_BIRD_SPOTS, Placement, SignupRequest, WaitlistError, WaitlistService};
