use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stop::Table)
                    .if_not_exists()
                    .col(string(Stop::Id).primary_key())
                    .col(string(Stop::Name))
                    .col(string_null(Stop::Code))
                    .col(string_null(Stop::Direction))
                    .col(double(Stop::Latitude))
                    .col(double(Stop::Longitude))
                    .col(integer(Stop::LocationType))
                    .col(string_null(Stop::WheelchairBoarding))
                    .col(string_null(Stop::ParentStopId))
                    .col(timestamp(Stop::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stop::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Stop {
    Table,
    Id,
    Name,
    Code,
    Direction,
    Latitude,
    Longitude,
    LocationType,
    WheelchairBoarding,
    ParentStopId,
    UpdatedAt,
}
