//! Business logic services composed from the data layer repositories.

pub mod verification;
