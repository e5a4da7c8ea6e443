//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (the flight corpus, user logbook entries, and users).

pub mod flight;
pub mod flight_entry;
pub mod user;
