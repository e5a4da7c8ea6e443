//! Test utilities for building application state over an in-memory database.

use axum::response::Response;
use pilotlog::{
    config::{Config, DEFAULT_TOLERANCE_MINUTES},
    model::app::AppState,
    service::verification::WindowPolicy,
};
use pilotlog_test_utils::{fixtures::factory::TEST_USER_EMAIL_HASH, TestSetup};

/// Extension trait for [`TestSetup`] to build an [`AppState`] carrying a
/// default test configuration pinned to the factory's test user.
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            config: Config {
                database_url: "sqlite::memory:".to_string(),
                port: 3002,
                verification_tolerance_minutes: DEFAULT_TOLERANCE_MINUTES,
                verification_window: WindowPolicy::DayBucket,
                user_email_hash: TEST_USER_EMAIL_HASH.to_string(),
            },
        }
    }
}

/// Drains a response body and parses it as JSON.
pub async fn response_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
