use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(string(Route::Id).primary_key())
                    .col(string(Route::AgencyId))
                    .col(string_null(Route::ShortName))
                    .col(string_null(Route::LongName))
                    .col(text_null(Route::Description))
                    .col(integer(Route::RouteType))
                    .col(string_null(Route::Url))
                    .col(string_null(Route::Color))
                    .col(string_null(Route::TextColor))
                    .col(timestamp(Route::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_agency_id")
                    .table(Route::Table)
                    .col(Route::AgencyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Route {
    Table,
    Id,
    AgencyId,
    ShortName,
    LongName,
    Description,
    RouteType,
    Url,
    Color,
    TextColor,
    UpdatedAt,
}
