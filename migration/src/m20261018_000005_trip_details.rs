use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripDetails::Table)
                    .if_not_exists()
                    .col(string(TripDetails::TripId).primary_key())
                    .col(big_integer(TripDetails::ServiceDate))
                    .col(string_null(TripDetails::PreviousTripId))
                    .col(string_null(TripDetails::NextTripId))
                    .col(string_null(TripDetails::TimeZone))
                    .col(timestamp(TripDetails::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TripDetails {
    Table,
    TripId,
    ServiceDate,
    PreviousTripId,
    NextTripId,
    TimeZone,
    UpdatedAt,
}
