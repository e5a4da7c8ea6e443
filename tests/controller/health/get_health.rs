//! Tests for the get_health endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use pilotlog::controller::health::get_health;

use super::*;

/// Tests that the health endpoint reports the server as running.
///
/// Expected: 200 OK response with status "ok"
#[tokio::test]
async fn success_reports_ok() {
    let resp = get_health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["status"], "ok");
}
