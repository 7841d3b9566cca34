use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::non_empty, data::BATCH_SIZE, model::api::TripDetailsDto};

pub struct TripDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripDetailsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores trip details and replaces the trip's cached stop times and situation links
    ///
    /// # Notes
    /// - Stop times and situation links are deleted and re-inserted, pass a transaction as
    ///   the connection so readers never observe a trip without its schedule
    pub async fn upsert(
        &self,
        details: TripDetailsDto,
    ) -> Result<entity::trip_details::Model, DbErr> {
        let schedule = details.schedule.unwrap_or_default();

        let model = entity::trip_details::ActiveModel {
            trip_id: ActiveValue::Set(details.trip_id.clone()),
            service_date: ActiveValue::Set(details.service_date),
            previous_trip_id: ActiveValue::Set(non_empty(schedule.previous_trip_id)),
            next_trip_id: ActiveValue::Set(non_empty(schedule.next_trip_id)),
            time_zone: ActiveValue::Set(non_empty(schedule.time_zone)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let trip_details = entity::prelude::TripDetails::insert(model)
            .on_conflict(
                OnConflict::column(entity::trip_details::Column::TripId)
                    .update_columns([
                        entity::trip_details::Column::ServiceDate,
                        entity::trip_details::Column::PreviousTripId,
                        entity::trip_details::Column::NextTripId,
                        entity::trip_details::Column::TimeZone,
                        entity::trip_details::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        entity::prelude::StopTime::delete_many()
            .filter(entity::stop_time::Column::TripId.eq(details.trip_id.as_str()))
            .exec(self.db)
            .await?;

        let stop_times: Vec<entity::stop_time::ActiveModel> = schedule
            .stop_times
            .into_iter()
            .enumerate()
            .map(|(sequence, stop_time)| entity::stop_time::ActiveModel {
                trip_id: ActiveValue::Set(details.trip_id.clone()),
                stop_sequence: ActiveValue::Set(sequence as i32),
                stop_id: ActiveValue::Set(stop_time.stop_id),
                arrival_time: ActiveValue::Set(stop_time.arrival_time),
                departure_time: ActiveValue::Set(stop_time.departure_time),
                distance_along_trip: ActiveValue::Set(stop_time.distance_along_trip),
                ..Default::default()
            })
            .collect();

        for batch in stop_times.chunks(BATCH_SIZE) {
            entity::prelude::StopTime::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }

        entity::prelude::TripSituation::delete_many()
            .filter(entity::trip_situation::Column::TripId.eq(details.trip_id.as_str()))
            .exec(self.db)
            .await?;

        let mut situation_ids = details.situation_ids;
        situation_ids.sort();
        situation_ids.dedup();

        let links: Vec<entity::trip_situation::ActiveModel> = situation_ids
            .into_iter()
            .map(|situation_id| entity::trip_situation::ActiveModel {
                trip_id: ActiveValue::Set(details.trip_id.clone()),
                situation_id: ActiveValue::Set(situation_id),
                ..Default::default()
            })
            .collect();

        for batch in links.chunks(BATCH_SIZE) {
            entity::prelude::TripSituation::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(trip_details)
    }

    pub async fn find_by_trip_id(
        &self,
        trip_id: &str,
    ) -> Result<Option<entity::trip_details::Model>, DbErr> {
        entity::prelude::TripDetails::find_by_id(trip_id)
            .one(self.db)
            .await
    }

    /// Get a trip's cached stop times in schedule order
    pub async fn get_stop_times(
        &self,
        trip_id: &str,
    ) -> Result<Vec<entity::stop_time::Model>, DbErr> {
        entity::prelude::StopTime::find()
            .filter(entity::stop_time::Column::TripId.eq(trip_id))
            .order_by_asc(entity::stop_time::Column::StopSequence)
            .all(self.db)
            .await
    }

    /// Get the IDs of the situations affecting a trip, as last reported by its trip details
    pub async fn get_situation_ids(&self, trip_id: &str) -> Result<Vec<String>, DbErr> {
        let links = entity::prelude::TripSituation::find()
            .filter(entity::trip_situation::Column::TripId.eq(trip_id))
            .order_by_asc(entity::trip_situation::Column::SituationId)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.situation_id).collect())
    }
}
