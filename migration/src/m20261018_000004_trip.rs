use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(string(Trip::Id).primary_key())
                    .col(string(Trip::RouteId))
                    .col(string(Trip::ServiceId))
                    .col(string_null(Trip::ShapeId))
                    .col(string_null(Trip::DirectionId))
                    .col(string_null(Trip::BlockId))
                    .col(string_null(Trip::Headsign))
                    .col(string_null(Trip::ShortName))
                    .col(string_null(Trip::RouteShortName))
                    .col(string_null(Trip::TimeZone))
                    .col(timestamp(Trip::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    RouteId,
    ServiceId,
    ShapeId,
    DirectionId,
    BlockId,
    Headsign,
    ShortName,
    RouteShortName,
    TimeZone,
    UpdatedAt,
}
