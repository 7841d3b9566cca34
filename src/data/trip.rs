use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::{data::non_empty, data::BATCH_SIZE, model::api::TripDto};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn upsert_many(
        &self,
        trips: Vec<TripDto>,
    ) -> Result<Vec<entity::trip::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(trips.len());

        for batch in trips.chunks(BATCH_SIZE) {
            let models = batch.iter().cloned().map(|trip| entity::trip::ActiveModel {
                id: ActiveValue::Set(trip.id),
                route_id: ActiveValue::Set(trip.route_id),
                service_id: ActiveValue::Set(trip.service_id),
                shape_id: ActiveValue::Set(non_empty(trip.shape_id)),
                direction_id: ActiveValue::Set(non_empty(trip.direction_id)),
                block_id: ActiveValue::Set(non_empty(trip.block_id)),
                headsign: ActiveValue::Set(non_empty(trip.trip_headsign)),
                short_name: ActiveValue::Set(non_empty(trip.trip_short_name)),
                route_short_name: ActiveValue::Set(non_empty(trip.route_short_name)),
                time_zone: ActiveValue::Set(non_empty(trip.time_zone)),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Trip::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::trip::Column::Id)
                        .update_columns([
                            entity::trip::Column::RouteId,
                            entity::trip::Column::ServiceId,
                            entity::trip::Column::ShapeId,
                            entity::trip::Column::DirectionId,
                            entity::trip::Column::BlockId,
                            entity::trip::Column::Headsign,
                            entity::trip::Column::ShortName,
                            entity::trip::Column::RouteShortName,
                            entity::trip::Column::TimeZone,
                            entity::trip::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            upserted.extend(models);
        }

        Ok(upserted)
    }

    pub async fn find_by_id(&self, trip_id: &str) -> Result<Option<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find_by_id(trip_id).one(self.db).await
    }
}
