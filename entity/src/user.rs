use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(unique)]
    pub email_hash: String,
    pub license_number: Option<String>,
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
