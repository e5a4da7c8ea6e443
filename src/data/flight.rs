use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Conjunctive equality filter over the corpus identity fields.
///
/// Each populated field contributes one equality predicate; absent fields impose
/// no constraint. An empty filter therefore matches the entire corpus, which is
/// the intended degraded behavior for an unconstrained verification query.
#[derive(Clone, Default)]
pub struct FlightFilter {
    pub tail_number: Option<String>,
    pub aircraft_model: Option<String>,
    pub manufacturer: Option<String>,
    pub origin_airport_icao: Option<String>,
    pub destination_airport_icao: Option<String>,
}

impl FlightFilter {
    fn condition(&self) -> Condition {
        let fields = [
            (entity::flight::Column::TailNumber, &self.tail_number),
            (entity::flight::Column::AircraftModel, &self.aircraft_model),
            (entity::flight::Column::Manufacturer, &self.manufacturer),
            (
                entity::flight::Column::OriginAirportIcao,
                &self.origin_airport_icao,
            ),
            (
                entity::flight::Column::DestinationAirportIcao,
                &self.destination_airport_icao,
            ),
        ];

        let mut condition = Condition::all();
        for (column, value) in fields {
            if let Some(value) = value {
                condition = condition.add(column.eq(value.clone()));
            }
        }

        condition
    }
}

/// Inclusive timing bounds applied on top of the identity filter.
///
/// The verification engine builds these from either the UTC day bucket of the
/// reported departure or a symmetric tolerance window around the reported
/// timestamps; the repository only sees concrete bounds.
#[derive(Clone)]
pub struct TimeWindow {
    pub departure: (NaiveDateTime, NaiveDateTime),
    pub arrival: Option<(NaiveDateTime, NaiveDateTime)>,
}

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new instance of [`FlightRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all corpus flights satisfying the identity filter and time window.
    ///
    /// Results are ordered by id so that an unconstrained scan is deterministic;
    /// the verification engine's first-match-wins rule depends on that.
    pub async fn find_all(
        &self,
        filter: &FlightFilter,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<entity::flight::Model>, DbErr> {
        let mut condition = filter.condition();

        if let Some(window) = window {
            let (from, to) = window.departure;
            condition = condition.add(entity::flight::Column::DepartureTime.between(from, to));

            if let Some((from, to)) = window.arrival {
                condition = condition.add(entity::flight::Column::ArrivalTime.between(from, to));
            }
        }

        entity::prelude::Flight::find()
            .filter(condition)
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await
    }

    /// Get a corpus flight by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::flight::Model>, DbErr> {
        entity::prelude::Flight::find_by_id(id).one(self.db).await
    }
}
