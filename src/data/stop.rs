use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{data::non_empty, data::BATCH_SIZE, model::api::StopDto};

pub struct StopRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StopRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates stops
    ///
    /// # Notes
    /// - A parent station may be stored before or after its children, parent IDs are not
    ///   checked against the stop table
    pub async fn upsert_many(
        &self,
        stops: Vec<StopDto>,
    ) -> Result<Vec<entity::stop::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(stops.len());

        for batch in stops.chunks(BATCH_SIZE) {
            let models = batch.iter().cloned().map(|stop| entity::stop::ActiveModel {
                id: ActiveValue::Set(stop.id),
                name: ActiveValue::Set(stop.name),
                code: ActiveValue::Set(non_empty(stop.code)),
                direction: ActiveValue::Set(non_empty(stop.direction)),
                latitude: ActiveValue::Set(stop.lat),
                longitude: ActiveValue::Set(stop.lon),
                location_type: ActiveValue::Set(stop.location_type),
                wheelchair_boarding: ActiveValue::Set(stop.wheelchair_boarding.and_then(non_empty)),
                parent_stop_id: ActiveValue::Set(non_empty(stop.parent)),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Stop::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::stop::Column::Id)
                        .update_columns([
                            entity::stop::Column::Name,
                            entity::stop::Column::Code,
                            entity::stop::Column::Direction,
                            entity::stop::Column::Latitude,
                            entity::stop::Column::Longitude,
                            entity::stop::Column::LocationType,
                            entity::stop::Column::WheelchairBoarding,
                            entity::stop::Column::ParentStopId,
                            entity::stop::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            upserted.extend(models);
        }

        Ok(upserted)
    }

    pub async fn find_by_id(&self, stop_id: &str) -> Result<Option<entity::stop::Model>, DbErr> {
        entity::prelude::Stop::find_by_id(stop_id).one(self.db).await
    }

    /// Get cached stops matching the provided IDs, IDs not in the cache are skipped
    pub async fn find_many(&self, stop_ids: &[String]) -> Result<Vec<entity::stop::Model>, DbErr> {
        if stop_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Stop::find()
            .filter(entity::stop::Column::Id.is_in(stop_ids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Get the parent station of a stop
    ///
    /// # Returns
    /// - `Some`: The stop is cached, has a parent, and the parent is cached too
    /// - `None`: Any of the above is missing
    pub async fn get_parent_stop(
        &self,
        stop_id: &str,
    ) -> Result<Option<entity::stop::Model>, DbErr> {
        let Some(stop) = self.find_by_id(stop_id).await? else {
            return Ok(None);
        };

        match stop.parent_stop_id {
            Some(parent_id) => self.find_by_id(&parent_id).await,
            None => Ok(None),
        }
    }
}
