use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntryDto {
    pub id: i32,
    pub user_id: i32,
    /// The corpus flight this entry was verified against, if any
    pub flight_id: Option<i32>,
    pub logbook_url: Option<String>,
    pub date: DateTime<Utc>,
    pub tail_number: String,
    pub src_icao: String,
    pub dest_icao: String,
    pub route: Option<String>,
    pub total_flight_time: f64,
    pub pic_time: f64,
    pub dual_received_time: f64,
    pub instrument_time: f64,
    pub cross_country: bool,
    pub night: bool,
    pub solo: bool,
    pub day_landings: i32,
    pub night_landings: i32,
    pub remarks: Option<String>,
}

impl From<entity::flight_entry::Model> for FlightEntryDto {
    fn from(entry: entity::flight_entry::Model) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            flight_id: entry.flight_id,
            logbook_url: entry.logbook_url,
            date: entry.date.and_utc(),
            tail_number: entry.tail_number,
            src_icao: entry.src_icao,
            dest_icao: entry.dest_icao,
            route: entry.route,
            total_flight_time: entry.total_flight_time,
            pic_time: entry.pic_time,
            dual_received_time: entry.dual_received_time,
            instrument_time: entry.instrument_time,
            cross_country: entry.cross_country,
            night: entry.night,
            solo: entry.solo,
            day_landings: entry.day_landings,
            night_landings: entry.night_landings,
            remarks: entry.remarks,
        }
    }
}

/// Body for creating a logbook entry.
///
/// Only the date, tail number, and route endpoints are required; the remaining
/// fields default to zero/false so the API stays flexible as the front-end evolves.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightEntryDto {
    pub logbook_url: Option<String>,
    pub date: DateTime<Utc>,
    pub tail_number: String,
    pub src_icao: String,
    pub dest_icao: String,
    pub route: Option<String>,
    pub total_flight_time: Option<f64>,
    pub pic_time: Option<f64>,
    pub dual_received_time: Option<f64>,
    pub instrument_time: Option<f64>,
    pub cross_country: Option<bool>,
    pub night: Option<bool>,
    pub solo: Option<bool>,
    pub day_landings: Option<i32>,
    pub night_landings: Option<i32>,
    pub remarks: Option<String>,
}

/// Body for partially updating a logbook entry; absent fields are left unchanged.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightEntryDto {
    pub logbook_url: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub tail_number: Option<String>,
    pub src_icao: Option<String>,
    pub dest_icao: Option<String>,
    pub route: Option<String>,
    pub total_flight_time: Option<f64>,
    pub pic_time: Option<f64>,
    pub dual_received_time: Option<f64>,
    pub instrument_time: Option<f64>,
    pub cross_country: Option<bool>,
    pub night: Option<bool>,
    pub solo: Option<bool>,
    pub day_landings: Option<i32>,
    pub night_landings: Option<i32>,
    pub remarks: Option<String>,
}

/// Query parameters for listing logbook entries.
#[derive(Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntryQueryParams {
    /// Only return entries associated with this corpus flight
    pub flight_id: Option<i32>,
}
