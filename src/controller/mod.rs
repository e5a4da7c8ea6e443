//! HTTP request handlers.

pub mod flight_entry;
pub mod health;
pub mod user;
pub mod util;
pub mod verification;
