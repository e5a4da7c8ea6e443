//! Tests for logbook entry endpoints.

mod create_flight_entry;
mod delete_flight_entry;
mod update_flight_entry;

use super::*;
