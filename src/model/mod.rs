//! Request and response models shared across controllers.

pub mod api;
pub mod app;
pub mod flight;
pub mod flight_entry;
pub mod user;
