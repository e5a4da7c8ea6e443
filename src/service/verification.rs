use chrono::Duration;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    config::Config,
    data::{
        flight::{FlightFilter, FlightRepository, TimeWindow},
        flight_entry::FlightEntryRepository,
    },
    error::Error,
    model::flight::VerifyFlightDto,
    util::time::utc_day_bounds,
};

/// How the reported departure/arrival times constrain the corpus candidate search.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum WindowPolicy {
    /// Candidates must depart within the same UTC calendar day as the reported
    /// departure. The default; logbook entries usually carry a date without a
    /// reliable time of day.
    DayBucket,
    /// Candidates must depart (and arrive, when an arrival was reported) within
    /// the match tolerance of the reported timestamps. For callers with sub-day
    /// precision input.
    Symmetric,
}

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    tolerance: Duration,
    policy: WindowPolicy,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(db: &'a DatabaseConnection, tolerance_minutes: i64, policy: WindowPolicy) -> Self {
        Self {
            db,
            tolerance: Duration::minutes(tolerance_minutes),
            policy,
        }
    }

    /// Creates a [`VerificationService`] configured from the application config
    pub fn from_config(db: &'a DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            config.verification_tolerance_minutes,
            config.verification_window,
        )
    }

    /// Decide whether a user-reported flight corresponds to a known corpus flight.
    ///
    /// Two-phase filter-then-refine:
    /// 1. Every populated identity field narrows the corpus conjunctively; a
    ///    reported departure additionally constrains candidates by time window.
    /// 2. When both departure and arrival were reported, the first candidate whose
    ///    flight duration is within the tolerance of the reported duration wins.
    ///    Without both timestamps the first phase-1 candidate wins.
    ///
    /// Duration is compared instead of absolute clock alignment so timezone-naive
    /// logbook entries that only share a date still match.
    ///
    /// If the query references a logbook entry that already carries an
    /// association, the associated flight is returned directly without searching
    /// the corpus. Otherwise a found match is written back onto the entry
    /// best-effort: a failed association write is logged and the match is still
    /// returned, since the match itself remains correct.
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::flight::Model`]`>`: The matched corpus flight, or None
    ///   when nothing plausibly corresponds (a normal outcome, not an error)
    /// - [`Error::FlightEntryNotFound`]: The referenced logbook entry does not exist
    /// - [`Error`]: A database-related error
    pub async fn verify(
        &self,
        query: &VerifyFlightDto,
    ) -> Result<Option<entity::flight::Model>, Error> {
        let flight_repository = FlightRepository::new(self.db);
        let entry_repository = FlightEntryRepository::new(self.db);

        if let Some(entry_id) = query.flight_entry_id {
            let entry = entry_repository
                .get_by_id(entry_id)
                .await?
                .ok_or(Error::FlightEntryNotFound(entry_id))?;

            if let Some(flight_id) = entry.flight_id {
                // Entry was already verified; skip the corpus scan entirely
                if let Some(flight) = flight_repository.get_by_id(flight_id).await? {
                    return Ok(Some(flight));
                }
            }
        }

        let filter = FlightFilter {
            tail_number: query.tail_number.clone(),
            aircraft_model: query.aircraft_model.clone(),
            manufacturer: query.manufacturer.clone(),
            origin_airport_icao: query.origin_airport_icao.clone(),
            destination_airport_icao: query.destination_airport_icao.clone(),
        };

        let window = match query.departure_time {
            Some(departure) => Some(match self.policy {
                WindowPolicy::DayBucket => TimeWindow {
                    departure: utc_day_bounds(departure)?,
                    arrival: None,
                },
                WindowPolicy::Symmetric => TimeWindow {
                    departure: (
                        (departure - self.tolerance).naive_utc(),
                        (departure + self.tolerance).naive_utc(),
                    ),
                    arrival: query.arrival_time.map(|arrival| {
                        (
                            (arrival - self.tolerance).naive_utc(),
                            (arrival + self.tolerance).naive_utc(),
                        )
                    }),
                },
            }),
            None => None,
        };

        let candidates = flight_repository.find_all(&filter, window.as_ref()).await?;

        let matched = match (query.departure_time, query.arrival_time) {
            (Some(departure), Some(arrival)) => {
                // First candidate within tolerance wins; candidates are not ranked
                // by closeness. The comparison is inclusive at the boundary.
                let target_duration = arrival - departure;

                candidates.into_iter().find(|candidate| {
                    let candidate_duration = candidate.arrival_time - candidate.departure_time;

                    (candidate_duration - target_duration).abs() <= self.tolerance
                })
            }
            _ => candidates.into_iter().next(),
        };

        if let (Some(entry_id), Some(flight)) = (query.flight_entry_id, &matched) {
            // Best-effort bookkeeping: the match is returned even if recording it fails
            match entry_repository.set_flight(entry_id, flight.id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    warn!(
                        "Flight entry {} no longer exists, verification match {} was not recorded",
                        entry_id, flight.id
                    );
                }
                Err(err) => {
                    warn!(
                        "Failed to record verification match {} on flight entry {}: {}",
                        flight.id, entry_id, err
                    );
                }
            }
        }

        Ok(matched)
    }
}
