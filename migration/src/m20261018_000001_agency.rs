use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agency::Table)
                    .if_not_exists()
                    .col(string(Agency::Id).primary_key())
                    .col(string(Agency::Name))
                    .col(string(Agency::Url))
                    .col(string(Agency::Timezone))
                    .col(string_null(Agency::Lang))
                    .col(string_null(Agency::Phone))
                    .col(string_null(Agency::Email))
                    .col(string_null(Agency::FareUrl))
                    .col(text_null(Agency::Disclaimer))
                    .col(boolean(Agency::PrivateService))
                    .col(timestamp(Agency::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agency::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Agency {
    Table,
    Id,
    Name,
    Url,
    Timezone,
    Lang,
    Phone,
    Email,
    FareUrl,
    Disclaimer,
    PrivateService,
    UpdatedAt,
}
