//! TaxMate waitlist service
//!
//! Serves the TaxMate landing page and captures waitlist signups into PostgreSQL,
//! sending a welcome email through Resend when configured.

pub mod app;
pub mod core;
