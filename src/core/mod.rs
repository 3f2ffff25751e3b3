//! Domain logic for the waitlist: configuration, storage, email and the signup flow

pub mod config;
pub mod db;
pub mod email;
pub mod validation;
pub mod waitlist;
