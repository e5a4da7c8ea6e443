//! Pilot flight logbook backend.
//!
//! This crate contains all server-side functionality for the Pilotlog application, including
//! HTTP routing, logbook entry management, and the flight verification engine that
//! cross-references user-reported flights against the authoritative flight corpus.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
