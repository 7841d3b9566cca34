use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripSituation::Table)
                    .if_not_exists()
                    .col(pk_auto(TripSituation::Id))
                    .col(string(TripSituation::TripId))
                    .col(string(TripSituation::SituationId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_situation_trip_id_situation_id")
                    .table(TripSituation::Table)
                    .col(TripSituation::TripId)
                    .col(TripSituation::SituationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripSituation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TripSituation {
    Table,
    Id,
    TripId,
    SituationId,
}
