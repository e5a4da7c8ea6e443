//! Fixture factories for seeding test databases.
//!
//! The default corpus flight is tail `N12345` flying `KLAX -> KSFO`, departing
//! 2023-01-01T10:00:00Z and arriving 2023-01-01T12:00:00Z (a two hour flight).
//! Tests override individual fields before inserting.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub static TEST_USER_NAME: &str = "Michael Smith";
pub static TEST_USER_EMAIL: &str = "michael.smith@outlook.com";
pub static TEST_USER_EMAIL_HASH: &str =
    "1c61d3af9e95de4b161dc5c7d5d7e0cbc6de90f884defcfe6d49a5e8bce62806";

/// Builds a timestamp on the given UTC date, panicking on out-of-range input.
pub fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[derive(Clone)]
pub struct FlightFixture {
    pub tail_number: Option<String>,
    pub aircraft_model: Option<String>,
    pub manufacturer: Option<String>,
    pub origin_airport_icao: Option<String>,
    pub destination_airport_icao: Option<String>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

impl Default for FlightFixture {
    fn default() -> Self {
        Self {
            tail_number: Some("N12345".to_string()),
            aircraft_model: Some("172S".to_string()),
            manufacturer: Some("Cessna".to_string()),
            origin_airport_icao: Some("KLAX".to_string()),
            destination_airport_icao: Some("KSFO".to_string()),
            departure_time: ts(2023, 1, 1, 10, 0),
            arrival_time: ts(2023, 1, 1, 12, 0),
        }
    }
}

pub fn flight() -> FlightFixture {
    FlightFixture::default()
}

/// Inserts a corpus flight row built from the fixture.
pub async fn create_flight(
    db: &DatabaseConnection,
    fixture: FlightFixture,
) -> Result<entity::flight::Model, TestError> {
    let flight = entity::flight::ActiveModel {
        tail_number: ActiveValue::Set(fixture.tail_number),
        aircraft_model: ActiveValue::Set(fixture.aircraft_model),
        manufacturer: ActiveValue::Set(fixture.manufacturer),
        origin_airport_icao: ActiveValue::Set(fixture.origin_airport_icao),
        destination_airport_icao: ActiveValue::Set(fixture.destination_airport_icao),
        departure_time: ActiveValue::Set(fixture.departure_time),
        arrival_time: ActiveValue::Set(fixture.arrival_time),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(flight.insert(db).await?)
}

/// Inserts the pinned test user.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, TestError> {
    create_user_with(db, TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_EMAIL_HASH).await
}

pub async fn create_user_with(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    email_hash: &str,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        email_hash: ActiveValue::Set(email_hash.to_string()),
        license_number: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

/// Inserts a minimal logbook entry owned by `user_id`, optionally already
/// associated with a corpus flight.
pub async fn create_flight_entry(
    db: &DatabaseConnection,
    user_id: i32,
    flight_id: Option<i32>,
) -> Result<entity::flight_entry::Model, TestError> {
    let entry = entity::flight_entry::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        flight_id: ActiveValue::Set(flight_id),
        logbook_url: ActiveValue::Set(None),
        date: ActiveValue::Set(ts(2023, 1, 1, 0, 0)),
        tail_number: ActiveValue::Set("N12345".to_string()),
        src_icao: ActiveValue::Set("KLAX".to_string()),
        dest_icao: ActiveValue::Set("KSFO".to_string()),
        route: ActiveValue::Set(None),
        total_flight_time: ActiveValue::Set(2.0),
        pic_time: ActiveValue::Set(0.0),
        dual_received_time: ActiveValue::Set(0.0),
        instrument_time: ActiveValue::Set(0.0),
        cross_country: ActiveValue::Set(true),
        night: ActiveValue::Set(false),
        solo: ActiveValue::Set(false),
        day_landings: ActiveValue::Set(1),
        night_landings: ActiveValue::Set(0),
        remarks: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(entry.insert(db).await?)
}
