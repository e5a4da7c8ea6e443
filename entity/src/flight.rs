use sea_orm::entity::prelude::*;

/// An authoritative corpus flight; seeded externally and read-only to the server.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tail_number: Option<String>,
    pub aircraft_model: Option<String>,
    pub manufacturer: Option<String>,
    pub origin_airport_icao: Option<String>,
    pub destination_airport_icao: Option<String>,
    pub departure_time: DateTime,
    pub arrival_time: DateTime,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight_entry::Entity")]
    FlightEntry,
}

impl Related<super::flight_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
