//! Tests for the delete_flight_entry endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pilotlog::{
    controller::flight_entry::delete_flight_entry, data::flight_entry::FlightEntryRepository,
};

use super::*;

/// Tests deletion of an owned entry.
///
/// Expected: Ok with 200 OK response containing the deleted entry, row removed
#[tokio::test]
async fn success_returns_deleted_entry() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    let user = factory::create_user(&test.db).await?;
    let entry = factory::create_flight_entry(&test.db, user.id, None).await?;

    let result = delete_flight_entry(State(test.into_app_state()), Path(entry.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["id"], entry.id);

    let entry_repository = FlightEntryRepository::new(&test.db);
    assert!(entry_repository.get_by_id(entry.id).await?.is_none());

    Ok(())
}

/// Tests 404 response for an entry that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_entry_missing() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_user(&test.db).await?;

    let result = delete_flight_entry(State(test.into_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that another user's entry cannot be deleted.
///
/// Expected: Err with 404 NOT_FOUND response and the row still present
#[tokio::test]
async fn not_found_for_other_users_entry() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_user(&test.db).await?;
    let other =
        factory::create_user_with(&test.db, "Jane Doe", "jane.doe@outlook.com", "otherhash")
            .await?;
    let entry = factory::create_flight_entry(&test.db, other.id, None).await?;

    let result = delete_flight_entry(State(test.into_app_state()), Path(entry.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let entry_repository = FlightEntryRepository::new(&test.db);
    assert!(entry_repository.get_by_id(entry.id).await?.is_some());

    Ok(())
}
