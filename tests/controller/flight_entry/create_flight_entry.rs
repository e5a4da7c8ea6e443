//! Tests for the create_flight_entry endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{TimeZone, Utc};
use pilotlog::{
    controller::flight_entry::create_flight_entry, model::flight_entry::CreateFlightEntryDto,
};

use super::*;

fn create_body() -> CreateFlightEntryDto {
    CreateFlightEntryDto {
        logbook_url: None,
        date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        tail_number: "N12345".to_string(),
        src_icao: "KLAX".to_string(),
        dest_icao: "KSFO".to_string(),
        route: None,
        total_flight_time: Some(2.0),
        pic_time: None,
        dual_received_time: None,
        instrument_time: None,
        cross_country: None,
        night: None,
        solo: None,
        day_landings: None,
        night_landings: None,
        remarks: None,
    }
}

/// Tests entry creation with omitted fields defaulting to zero and false.
///
/// Expected: Ok with 201 CREATED response containing the defaulted entry
#[tokio::test]
async fn success_with_defaults_for_omitted_fields() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;
    let user = factory::create_user(&test.db).await?;

    let result = create_flight_entry(State(test.into_app_state()), Json(create_body())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await;
    assert_eq!(body["userId"], user.id);
    assert_eq!(body["tailNumber"], "N12345");
    assert_eq!(body["totalFlightTime"], 2.0);
    assert_eq!(body["picTime"], 0.0);
    assert_eq!(body["crossCountry"], false);
    assert_eq!(body["dayLandings"], 0);
    assert!(body["flightId"].is_null());

    Ok(())
}

/// Tests 404 response when no user exists for the configured email hash.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_user_missing() -> Result<(), TestError> {
    let test = test_setup_with_logbook_tables!()?;

    let result = create_flight_entry(State(test.into_app_state()), Json(create_body())).await;

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

    let result = create_flight_entry(State(test.into_app_state()), Json(create_body())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
