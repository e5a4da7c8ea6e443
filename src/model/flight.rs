use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A corpus flight as returned by the verification endpoint.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub id: i32,
    pub tail_number: Option<String>,
    pub aircraft_model: Option<String>,
    pub manufacturer: Option<String>,
    pub origin_airport_icao: Option<String>,
    pub destination_airport_icao: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

impl From<entity::flight::Model> for FlightDto {
    fn from(flight: entity::flight::Model) -> Self {
        Self {
            id: flight.id,
            tail_number: flight.tail_number,
            aircraft_model: flight.aircraft_model,
            manufacturer: flight.manufacturer,
            origin_airport_icao: flight.origin_airport_icao,
            destination_airport_icao: flight.destination_airport_icao,
            departure_time: flight.departure_time.and_utc(),
            arrival_time: flight.arrival_time.and_utc(),
        }
    }
}

/// A user-reported flight submitted for verification against the corpus.
///
/// Every field is optional; absent identity fields impose no constraint on the
/// candidate search. `flight_entry_id` additionally records the match onto that
/// logbook entry when one is found.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyFlightDto {
    pub flight_entry_id: Option<i32>,
    pub tail_number: Option<String>,
    pub aircraft_model: Option<String>,
    pub manufacturer: Option<String>,
    pub origin_airport_icao: Option<String>,
    pub destination_airport_icao: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
}
