//! Tests for user management endpoints.


use super::*;
