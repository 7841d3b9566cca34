use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SituationWindow::Table)
                    .if_not_exists()
                    .col(pk_auto(SituationWindow::Id))
                    .col(string(SituationWindow::SituationId))
                    .col(string(SituationWindow::Kind))
                    .col(big_integer(SituationWindow::FromTime))
                    .col(big_integer_null(SituationWindow::ToTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_situation_window_situation_id")
                    .table(SituationWindow::Table)
                    .col(SituationWindow::SituationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SituationWindow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SituationWindow {
    Table,
    Id,
    SituationId,
    Kind,
    FromTime,
    ToTime,
}
