use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::{data::non_empty, data::BATCH_SIZE, model::api::AgencyDto};

pub struct AgencyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgencyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts agencies, replacing every column of agencies already cached
    pub async fn upsert_many(
        &self,
        agencies: Vec<AgencyDto>,
    ) -> Result<Vec<entity::agency::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(agencies.len());

        for batch in agencies.chunks(BATCH_SIZE) {
            let models = batch.iter().cloned().map(|agency| entity::agency::ActiveModel {
                id: ActiveValue::Set(agency.id),
                name: ActiveValue::Set(agency.name),
                url: ActiveValue::Set(agency.url),
                timezone: ActiveValue::Set(agency.timezone),
                lang: ActiveValue::Set(non_empty(agency.lang)),
                phone: ActiveValue::Set(non_empty(agency.phone)),
                email: ActiveValue::Set(non_empty(agency.email)),
                fare_url: ActiveValue::Set(non_empty(agency.fare_url)),
                disclaimer: ActiveValue::Set(non_empty(agency.disclaimer)),
                private_service: ActiveValue::Set(agency.private_service),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            });

            let models = entity::prelude::Agency::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::agency::Column::Id)
                        .update_columns([
                            entity::agency::Column::Name,
                            entity::agency::Column::Url,
                            entity::agency::Column::Timezone,
                            entity::agency::Column::Lang,
                            entity::agency::Column::Phone,
                            entity::agency::Column::Email,
                            entity::agency::Column::FareUrl,
                            entity::agency::Column::Disclaimer,
                            entity::agency::Column::PrivateService,
                            entity::agency::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            upserted.extend(models);
        }

        Ok(upserted)
    }

    /// Get all cached agencies sorted by name
    pub async fn get_all(&self) -> Result<Vec<entity::agency::Model>, DbErr> {
        entity::prelude::Agency::find()
            .order_by_asc(entity::agency::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        agency_id: &str,
    ) -> Result<Option<entity::agency::Model>, DbErr> {
        entity::prelude::Agency::find_by_id(agency_id)
            .one(self.db)
            .await
    }
}
