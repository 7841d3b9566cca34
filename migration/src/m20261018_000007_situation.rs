use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Situation::Table)
                    .if_not_exists()
                    .col(string(Situation::Id).primary_key())
                    .col(big_integer(Situation::CreationTime))
                    .col(string_null(Situation::Reason))
                    .col(string_null(Situation::Severity))
                    .col(text_null(Situation::Summary))
                    .col(text_null(Situation::Description))
                    .col(text_null(Situation::Advice))
                    .col(string_null(Situation::Url))
                    .col(timestamp(Situation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Situation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Situation {
    Table,
    Id,
    CreationTime,
    Reason,
    Severity,
    Summary,
    Description,
    Advice,
    Url,
    UpdatedAt,
}
