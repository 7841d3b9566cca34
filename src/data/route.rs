use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{data::non_empty, data::BATCH_SIZE, model::api::RouteDto};

pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn upsert_many(
        &self,
        routes: Vec<RouteDto>,
    ) -> Result<Vec<entity::route::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(routes.len());

        for batch in routes.chunks(BATCH_SIZE) {
            let models = batch.iter().cloned().map(|route| entity::route::ActiveModel {
                id: ActiveValue::Set(route.id),
                agency_id: ActiveValue::Set(route.agency_id),
                short_name: ActiveValue::Set(non_empty(route.short_name)),
                long_name: ActiveValue::Set(non_empty(route.long_name)),
                description: ActiveValue::Set(non_empty(route.description)),
                route_type: ActiveValue::Set(route.route_type),
                url: ActiveValue::Set(non_empty(route.url)),
                color: ActiveValue::Set(non_empty(route.color)),
                text_color: ActiveValue::Set(non_empty(route.text_color)),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Route::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::route::Column::Id)
                        .update_columns([
                            entity::route::Column::AgencyId,
                            entity::route::Column::ShortName,
                            entity::route::Column::LongName,
                            entity::route::Column::Description,
                            entity::route::Column::RouteType,
                            entity::route::Column::Url,
                            entity::route::Column::Color,
                            entity::route::Column::TextColor,
                            entity::route::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            upserted.extend(models);
        }

        Ok(upserted)
    }

    pub async fn find_by_id(&self, route_id: &str) -> Result<Option<entity::route::Model>, DbErr> {
        entity::prelude::Route::find_by_id(route_id)
            .one(self.db)
            .await
    }

    /// Get all cached routes operated by an agency
    pub async fn get_by_agency_id(
        &self,
        agency_id: &str,
    ) -> Result<Vec<entity::route::Model>, DbErr> {
        entity::prelude::Route::find()
            .filter(entity::route::Column::AgencyId.eq(agency_id))
            .all(self.db)
            .await
    }
}
