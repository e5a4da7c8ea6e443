pub use sea_orm_migration::prelude::*;

mod m20260601_000001_user;
mod m20260601_000002_flight;
mod m20260601_000003_flight_entry;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_user::Migration),
            Box::new(m20260601_000002_flight::Migration),
            Box::new(m20260601_000003_flight_entry::Migration),
        ]
    }
}
