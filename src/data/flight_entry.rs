use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::flight_entry::{CreateFlightEntryDto, UpdateFlightEntryDto};

pub struct FlightEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightEntryRepository<'a> {
    /// Creates a new instance of [`FlightEntryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new logbook entry owned by `user_id`
    ///
    /// Optional numeric and boolean fields default to zero/false; the API stays
    /// permissive so the front-end can send only what it collects.
    pub async fn create(
        &self,
        user_id: i32,
        entry: CreateFlightEntryDto,
    ) -> Result<entity::flight_entry::Model, DbErr> {
        let entry = entity::flight_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            flight_id: ActiveValue::Set(None),
            logbook_url: ActiveValue::Set(entry.logbook_url),
            date: ActiveValue::Set(entry.date.naive_utc()),
            tail_number: ActiveValue::Set(entry.tail_number),
            src_icao: ActiveValue::Set(entry.src_icao),
            dest_icao: ActiveValue::Set(entry.dest_icao),
            route: ActiveValue::Set(entry.route),
            total_flight_time: ActiveValue::Set(entry.total_flight_time.unwrap_or(0.0)),
            pic_time: ActiveValue::Set(entry.pic_time.unwrap_or(0.0)),
            dual_received_time: ActiveValue::Set(entry.dual_received_time.unwrap_or(0.0)),
            instrument_time: ActiveValue::Set(entry.instrument_time.unwrap_or(0.0)),
            cross_country: ActiveValue::Set(entry.cross_country.unwrap_or(false)),
            night: ActiveValue::Set(entry.night.unwrap_or(false)),
            solo: ActiveValue::Set(entry.solo.unwrap_or(false)),
            day_landings: ActiveValue::Set(entry.day_landings.unwrap_or(0)),
            night_landings: ActiveValue::Set(entry.night_landings.unwrap_or(0)),
            remarks: ActiveValue::Set(entry.remarks),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Get a logbook entry by its primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::flight_entry::Model>, DbErr> {
        entity::prelude::FlightEntry::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all logbook entries for the provided user ID, newest date first
    ///
    /// When `flight_id` is provided only entries verified against that corpus
    /// flight are returned.
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
        flight_id: Option<i32>,
    ) -> Result<Vec<entity::flight_entry::Model>, DbErr> {
        let mut query = entity::prelude::FlightEntry::find()
            .filter(entity::flight_entry::Column::UserId.eq(user_id));

        if let Some(flight_id) = flight_id {
            query = query.filter(entity::flight_entry::Column::FlightId.eq(flight_id));
        }

        query
            .order_by_desc(entity::flight_entry::Column::Date)
            .all(self.db)
            .await
    }

    /// Update a logbook entry with the provided partial fields
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::flight_entry::Model`]`>`: Some if the update succeeded
    ///   or None if the entry was not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update(
        &self,
        id: i32,
        updates: UpdateFlightEntryDto,
    ) -> Result<Option<entity::flight_entry::Model>, DbErr> {
        let entry = match entity::prelude::FlightEntry::find_by_id(id).one(self.db).await? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let mut entry_am = entry.into_active_model();

        if let Some(logbook_url) = updates.logbook_url {
            entry_am.logbook_url = ActiveValue::Set(Some(logbook_url));
        }
        if let Some(date) = updates.date {
            entry_am.date = ActiveValue::Set(date.naive_utc());
        }
        if let Some(tail_number) = updates.tail_number {
            entry_am.tail_number = ActiveValue::Set(tail_number);
        }
        if let Some(src_icao) = updates.src_icao {
            entry_am.src_icao = ActiveValue::Set(src_icao);
        }
        if let Some(dest_icao) = updates.dest_icao {
            entry_am.dest_icao = ActiveValue::Set(dest_icao);
        }
        if let Some(route) = updates.route {
            entry_am.route = ActiveValue::Set(Some(route));
        }
        if let Some(total_flight_time) = updates.total_flight_time {
            entry_am.total_flight_time = ActiveValue::Set(total_flight_time);
        }
        if let Some(pic_time) = updates.pic_time {
            entry_am.pic_time = ActiveValue::Set(pic_time);
        }
        if let Some(dual_received_time) = updates.dual_received_time {
            entry_am.dual_received_time = ActiveValue::Set(dual_received_time);
        }
        if let Some(instrument_time) = updates.instrument_time {
            entry_am.instrument_time = ActiveValue::Set(instrument_time);
        }
        if let Some(cross_country) = updates.cross_country {
            entry_am.cross_country = ActiveValue::Set(cross_country);
        }
        if let Some(night) = updates.night {
            entry_am.night = ActiveValue::Set(night);
        }
        if let Some(solo) = updates.solo {
            entry_am.solo = ActiveValue::Set(solo);
        }
        if let Some(day_landings) = updates.day_landings {
            entry_am.day_landings = ActiveValue::Set(day_landings);
        }
        if let Some(night_landings) = updates.night_landings {
            entry_am.night_landings = ActiveValue::Set(night_landings);
        }
        if let Some(remarks) = updates.remarks {
            entry_am.remarks = ActiveValue::Set(Some(remarks));
        }
        entry_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let entry = entry_am.update(self.db).await?;

        Ok(Some(entry))
    }

    /// Record the corpus flight a logbook entry was verified against
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::flight_entry::Model`]`>`: Some if the association was
    ///   written or None if the entry was not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn set_flight(
        &self,
        id: i32,
        flight_id: i32,
    ) -> Result<Option<entity::flight_entry::Model>, DbErr> {
        let entry = match entity::prelude::FlightEntry::find_by_id(id).one(self.db).await? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let mut entry_am = entry.into_active_model();
        entry_am.flight_id = ActiveValue::Set(Some(flight_id));
        entry_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let entry = entry_am.update(self.db).await?;

        Ok(Some(entry))
    }

    /// Deletes a logbook entry
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FlightEntry::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
