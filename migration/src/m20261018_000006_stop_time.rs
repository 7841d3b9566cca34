use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StopTime::Table)
                    .if_not_exists()
                    .col(pk_auto(StopTime::Id))
                    .col(string(StopTime::TripId))
                    .col(integer(StopTime::StopSequence))
                    .col(string(StopTime::StopId))
                    .col(big_integer(StopTime::ArrivalTime))
                    .col(big_integer(StopTime::DepartureTime))
                    .col(double_null(StopTime::DistanceAlongTrip))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stop_time_trip_id_sequence")
                    .table(StopTime::Table)
                    .col(StopTime::TripId)
                    .col(StopTime::StopSequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StopTime::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StopTime {
    Table,
    Id,
    TripId,
    StopSequence,
    StopId,
    ArrivalTime,
    DepartureTime,
    DistanceAlongTrip,
}
