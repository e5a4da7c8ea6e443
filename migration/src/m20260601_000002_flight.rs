use sea_orm_migration::{prelude::*, schema::*};

static IDX_FLIGHT_DEPARTURE_TIME: &str = "idx-flight-departure_time";
static IDX_FLIGHT_TAIL_NUMBER: &str = "idx-flight-tail_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_null(Flight::TailNumber))
                    .col(string_null(Flight::AircraftModel))
                    .col(string_null(Flight::Manufacturer))
                    .col(string_null(Flight::OriginAirportIcao))
                    .col(string_null(Flight::DestinationAirportIcao))
                    .col(timestamp(Flight::DepartureTime))
                    .col(timestamp(Flight::ArrivalTime))
                    .col(timestamp(Flight::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Verification filters by departure day window and tail number most often
        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_DEPARTURE_TIME)
                    .table(Flight::Table)
                    .col(Flight::DepartureTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_TAIL_NUMBER)
                    .table(Flight::Table)
                    .col(Flight::TailNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_TAIL_NUMBER)
                    .table(Flight::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_DEPARTURE_TIME)
                    .table(Flight::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    TailNumber,
    AircraftModel,
    Manufacturer,
    OriginAirportIcao,
    DestinationAirportIcao,
    DepartureTime,
    ArrivalTime,
    CreatedAt,
}
