use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SituationAffect::Table)
                    .if_not_exists()
                    .col(pk_auto(SituationAffect::Id))
                    .col(string(SituationAffect::SituationId))
                    .col(string_null(SituationAffect::AgencyId))
                    .col(string_null(SituationAffect::RouteId))
                    .col(string_null(SituationAffect::StopId))
                    .col(string_null(SituationAffect::TripId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_situation_affect_situation_id")
                    .table(SituationAffect::Table)
                    .col(SituationAffect::SituationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SituationAffect::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SituationAffect {
    Table,
    Id,
    SituationId,
    AgencyId,
    RouteId,
    StopId,
    TripId,
}
