//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response formatting, and error
//! handling for all API endpoints.

mod flight_entry;
mod user;
mod verification;

use pilotlog_test_utils::prelude::*;

use crate::util::{response_json, TestSetupExt};
