//! Tests for the verify_flight endpoint.
//!
//! This module verifies the verify_flight endpoint's behavior over a seeded
//! corpus, including successful matches, the null-body no-match outcome,
//! association write-back onto logbook entries, and error handling for missing
//! entries and database issues.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{TimeZone, Utc};
use pilotlog::{
    controller::verification::verify_flight, data::flight_entry::FlightEntryRepository,
    model::flight::VerifyFlightDto,
};

use super::*;

/// A report against the default corpus flight, two minutes off in duration.
fn matching_query() -> VerifyFlightDto {
    VerifyFlightDto {
        tail_number: Some("N12345".to_string()),
        origin_airport_icao: Some("KLAX".to_string()),
        destination_airport_icao: Some("KSFO".to_string()),
        departure_time: Some(Utc.with_ymd_and_hms(2023, 1, 1, 10, 5, 0).unwrap()),
        arrival_time: Some(Utc.with_ymd_and_hms(2023, 1, 1, 12, 3, 0).unwrap()),
        ..Default::default()
    }
}

/// Tests a successful verification against the seeded corpus.
///
/// Expected: Ok with 200 OK response containing the matched flight
#[tokio::test]
async fn success_with_matching_flight() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    let flight = factory::create_flight(&test.db, factory::flight()).await?;

    let result = verify_flight(State(test.into_app_state()), Json(matching_query())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["id"], flight.id);
    assert_eq!(body["tailNumber"], "N12345");

    Ok(())
}

/// Tests that no-match is reported as a 200 with a null body, not an error.
///
/// Expected: Ok with 200 OK response containing JSON null
#[tokio::test]
async fn success_with_null_for_no_match() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_flight(&test.db, factory::flight()).await?;

    let query = VerifyFlightDto {
        tail_number: Some("N00000".to_string()),
        ..Default::default()
    };
    let result = verify_flight(State(test.into_app_state()), Json(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert!(body.is_null());

    Ok(())
}

/// Tests that a match is recorded on the referenced logbook entry.
///
/// Expected: Ok with 200 OK response and the entry's flight_id updated
#[tokio::test]
async fn success_records_match_on_entry() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    let flight = factory::create_flight(&test.db, factory::flight()).await?;
    let user = factory::create_user(&test.db).await?;
    let entry = factory::create_flight_entry(&test.db, user.id, None).await?;

    let mut query = matching_query();
    query.flight_entry_id = Some(entry.id);

    let result = verify_flight(State(test.into_app_state()), Json(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let entry_repository = FlightEntryRepository::new(&test.db);
    let entry = entry_repository.get_by_id(entry.id).await?.unwrap();
    assert_eq!(entry.flight_id, Some(flight.id));

    Ok(())
}

/// Tests that an already-verified entry returns its recorded flight without a
/// corpus scan, even when the query carries no identity fields.
///
/// Expected: Ok with 200 OK response containing the recorded flight
#[tokio::test]
async fn success_returns_recorded_flight_for_verified_entry() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_flight(&test.db, factory::flight()).await?;

    let mut other = factory::flight();
    other.tail_number = Some("N77777".to_string());
    let associated_flight = factory::create_flight(&test.db, other).await?;

    let user = factory::create_user(&test.db).await?;
    let entry = factory::create_flight_entry(&test.db, user.id, Some(associated_flight.id)).await?;

    let query = VerifyFlightDto {
        flight_entry_id: Some(entry.id),
        ..Default::default()
    };
    let result = verify_flight(State(test.into_app_state()), Json(query)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["id"], associated_flight.id);

    Ok(())
}

/// Tests 404 response when the referenced logbook entry does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_entry_missing() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    factory::create_flight(&test.db, factory::flight()).await?;

    let query = VerifyFlightDto {
        flight_entry_id: Some(999),
        ..Default::default()
    };
    let result = verify_flight(State(test.into_app_state()), Json(query)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = verify_flight(
        State(test.into_app_state()),
        Json(VerifyFlightDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
