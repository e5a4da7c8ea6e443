//! Tests for the update_flight_entry endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pilotlog::{
    controller::flight_entry::update_flight_entry, model::flight_entry::UpdateFlightEntryDto,
};

use super::*;

/// Tests a partial update touching only the provided fields.
///
/// Expected: Ok with 200 OK response where untouched fields keep their values
#[tokio::test]
async fn success_with_partial_update() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    let user = factory::create_user(&test.db).await?;
    let entry = factory::create_flight_entry(&test.db, user.id, None).await?;

    let body = UpdateFlightEntryDto {
        pic_time: Some(1.5),
        remarks: Some("Pattern work".to_string()),
        ..Default::default()
    };
    let result = update_flight_entry(State(test.into_app_state()), Path(entry.id), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["picTime"], 1.5);
    assert_eq!(body["remarks"], "Pattern work");
    assert_eq!(body["tailNumber"], entry.tail_number);
    assert_eq!(body["totalFlightTime"], entry.total_flight_time);

    Ok(())
}

/// Tests 404 response for an entry that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_entry_missing() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_user(&test.db).await?;

    let result = update_flight_entry(
        State(test.into_app_state()),
        Path(999),
        Json(UpdateFlightEntryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that another user's entry cannot be updated.
///
/// Expected: Err with 404 NOT_FOUND response and the entry unchanged
#[tokio::test]
async fn not_found_for_other_users_entry() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_user(&test.db).await?;
    let other =
        factory::create_user_with(&test.db, "Jane Doe", "jane.doe@outlook.com", "otherhash")
            .await?;
    let entry = factory::create_flight_entry(&test.db, other.id, None).await?;

    let body = UpdateFlightEntryDto {
        remarks: Some("Should not land".to_string()),
        ..Default::default()
    };
    let result = update_flight_entry(State(test.into_app_state()), Path(entry.id), Json(body)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
