//! Tests for flight verification endpoints.

mod verify_flight;

use super::*;
