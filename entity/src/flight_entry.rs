use sea_orm::entity::prelude::*;

/// A user-authored logbook record; `flight_id` links to the corpus flight it was
/// verified against, when verification has matched one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub flight_id: Option<i32>,
    pub logbook_url: Option<String>,
    pub date: DateTime,
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
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Flight,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flight.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
