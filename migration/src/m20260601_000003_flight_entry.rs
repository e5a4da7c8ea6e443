use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260601_000001_user::User, m20260601_000002_flight::Flight};

static IDX_FLIGHT_ENTRY_USER_ID: &str = "idx-flight_entry-user_id";
static IDX_FLIGHT_ENTRY_FLIGHT_ID: &str = "idx-flight_entry-flight_id";
static FK_FLIGHT_ENTRY_USER_ID: &str = "fk-flight_entry-user_id";
static FK_FLIGHT_ENTRY_FLIGHT_ID: &str = "fk-flight_entry-flight_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(FlightEntry::Id))
                    .col(integer(FlightEntry::UserId))
                    .col(integer_null(FlightEntry::FlightId))
                    .col(string_null(FlightEntry::LogbookUrl))
                    .col(timestamp(FlightEntry::Date))
                    .col(string(FlightEntry::TailNumber))
                    .col(string(FlightEntry::SrcIcao))
                    .col(string(FlightEntry::DestIcao))
                    .col(string_null(FlightEntry::Route))
                    .col(double(FlightEntry::TotalFlightTime))
                    .col(double(FlightEntry::PicTime))
                    .col(double(FlightEntry::DualReceivedTime))
                    .col(double(FlightEntry::InstrumentTime))
                    .col(boolean(FlightEntry::CrossCountry))
                    .col(boolean(FlightEntry::Night))
                    .col(boolean(FlightEntry::Solo))
                    .col(integer(FlightEntry::DayLandings))
                    .col(integer(FlightEntry::NightLandings))
                    .col(text_null(FlightEntry::Remarks))
                    .col(timestamp(FlightEntry::CreatedAt))
                    .col(timestamp(FlightEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_ENTRY_USER_ID)
                    .table(FlightEntry::Table)
                    .col(FlightEntry::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLIGHT_ENTRY_FLIGHT_ID)
                    .table(FlightEntry::Table)
                    .col(FlightEntry::FlightId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLIGHT_ENTRY_USER_ID)
                    .from_tbl(FlightEntry::Table)
                    .from_col(FlightEntry::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLIGHT_ENTRY_FLIGHT_ID)
                    .from_tbl(FlightEntry::Table)
                    .from_col(FlightEntry::FlightId)
                    .to_tbl(Flight::Table)
                    .to_col(Flight::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLIGHT_ENTRY_FLIGHT_ID)
                    .table(FlightEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLIGHT_ENTRY_USER_ID)
                    .table(FlightEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_ENTRY_FLIGHT_ID)
                    .table(FlightEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLIGHT_ENTRY_USER_ID)
                    .table(FlightEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FlightEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FlightEntry {
    Table,
    Id,
    UserId,
    FlightId,
    LogbookUrl,
    Date,
    TailNumber,
    SrcIcao,
    DestIcao,
    Route,
    TotalFlightTime,
    PicTime,
    DualReceivedTime,
    InstrumentTime,
    CrossCountry,
    Night,
    Solo,
    DayLandings,
    NightLandings,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
