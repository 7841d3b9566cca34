use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{
    data::{non_empty, BATCH_SIZE},
    model::{
        api::{SituationDto, TimeWindowDto, TranslatedStringDto},
        situation::{DetailedSituation, TimeWindow},
    },
};

const ACTIVE_WINDOW: &str = "active";
const PUBLICATION_WINDOW: &str = "publication";

pub struct SituationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SituationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or updates situations, replacing their time windows and affected entities
    ///
    /// # Notes
    /// - Windows and affects are deleted and re-inserted, pass a transaction as the
    ///   connection so readers never observe a situation without them
    pub async fn upsert_many(
        &self,
        situations: Vec<SituationDto>,
    ) -> Result<Vec<entity::situation::Model>, DbErr> {
        let mut upserted = Vec::with_capacity(situations.len());

        for batch in situations.chunks(BATCH_SIZE) {
            let models = batch
                .iter()
                .cloned()
                .map(|situation| entity::situation::ActiveModel {
                    id: ActiveValue::Set(situation.id),
                    creation_time: ActiveValue::Set(situation.creation_time),
                    reason: ActiveValue::Set(non_empty(situation.reason)),
                    severity: ActiveValue::Set(non_empty(situation.severity)),
                    summary: ActiveValue::Set(translated(situation.summary)),
                    description: ActiveValue::Set(translated(situation.description)),
                    advice: ActiveValue::Set(translated(situation.advice)),
                    url: ActiveValue::Set(translated(situation.url)),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                });

            let models = entity::prelude::Situation::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::situation::Column::Id)
                        .update_columns([
                            entity::situation::Column::CreationTime,
                            entity::situation::Column::Reason,
                            entity::situation::Column::Severity,
                            entity::situation::Column::Summary,
                            entity::situation::Column::Description,
                            entity::situation::Column::Advice,
                            entity::situation::Column::Url,
                            entity::situation::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;

            upserted.extend(models);
        }

        let situation_ids: Vec<String> = situations.iter().map(|s| s.id.clone()).collect();
        self.delete_details(&situation_ids).await?;

        let mut windows = Vec::new();
        let mut affects = Vec::new();
        for situation in situations {
            windows.extend(window_models(
                &situation.id,
                ACTIVE_WINDOW,
                situation.active_windows,
            ));
            windows.extend(window_models(
                &situation.id,
                PUBLICATION_WINDOW,
                situation.publication_windows,
            ));
            affects.extend(situation.all_affects.into_iter().map(|affect| {
                entity::situation_affect::ActiveModel {
                    situation_id: ActiveValue::Set(situation.id.clone()),
                    agency_id: ActiveValue::Set(non_empty(affect.agency_id)),
                    route_id: ActiveValue::Set(non_empty(affect.route_id)),
                    stop_id: ActiveValue::Set(non_empty(affect.stop_id)),
                    trip_id: ActiveValue::Set(non_empty(affect.trip_id)),
                    ..Default::default()
                }
            }));
        }

        for batch in windows.chunks(BATCH_SIZE) {
            entity::prelude::SituationWindow::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }
        for batch in affects.chunks(BATCH_SIZE) {
            entity::prelude::SituationAffect::insert_many(batch.to_vec())
                .exec(self.db)
                .await?;
        }

        Ok(upserted)
    }

    async fn delete_details(&self, situation_ids: &[String]) -> Result<(), DbErr> {
        if situation_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::SituationWindow::delete_many()
            .filter(
                entity::situation_window::Column::SituationId.is_in(situation_ids.iter().cloned()),
            )
            .exec(self.db)
            .await?;
        entity::prelude::SituationAffect::delete_many()
            .filter(
                entity::situation_affect::Column::SituationId.is_in(situation_ids.iter().cloned()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Get cached situations matching the provided IDs, IDs not in the cache are skipped
    pub async fn find_many(
        &self,
        situation_ids: &[String],
    ) -> Result<Vec<entity::situation::Model>, DbErr> {
        if situation_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Situation::find()
            .filter(entity::situation::Column::Id.is_in(situation_ids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Get a situation with its time windows and the cached entities it affects
    ///
    /// # Returns
    /// - `Some`: The situation is cached
    /// - `None`: The situation has never been fetched
    pub async fn find_detailed(
        &self,
        situation_id: &str,
    ) -> Result<Option<DetailedSituation>, DbErr> {
        let Some(situation) = entity::prelude::Situation::find_by_id(situation_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let windows = entity::prelude::SituationWindow::find()
            .filter(entity::situation_window::Column::SituationId.eq(situation_id))
            .all(self.db)
            .await?;

        let mut active_windows = Vec::new();
        let mut publication_windows = Vec::new();
        for window in windows {
            let Some(parsed) = time_window(&window) else {
                continue;
            };

            match window.kind.as_str() {
                ACTIVE_WINDOW => active_windows.push(parsed),
                PUBLICATION_WINDOW => publication_windows.push(parsed),
                _ => {}
            }
        }

        let affects = entity::prelude::SituationAffect::find()
            .filter(entity::situation_affect::Column::SituationId.eq(situation_id))
            .all(self.db)
            .await?;

        let agency_ids = collect_ids(affects.iter().map(|a| &a.agency_id));
        let route_ids = collect_ids(affects.iter().map(|a| &a.route_id));
        let stop_ids = collect_ids(affects.iter().map(|a| &a.stop_id));
        let trip_ids = collect_ids(affects.iter().map(|a| &a.trip_id));

        let affected_agencies = entity::prelude::Agency::find()
            .filter(entity::agency::Column::Id.is_in(agency_ids))
            .all(self.db)
            .await?;
        let affected_routes = entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(route_ids))
            .all(self.db)
            .await?;
        let affected_stops = entity::prelude::Stop::find()
            .filter(entity::stop::Column::Id.is_in(stop_ids))
            .all(self.db)
            .await?;
        let affected_trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::Id.is_in(trip_ids))
            .all(self.db)
            .await?;

        Ok(Some(DetailedSituation {
            situation,
            active_windows,
            publication_windows,
            affected_agencies,
            affected_routes,
            affected_stops,
            affected_trips,
        }))
    }
}

fn translated(value: Option<TranslatedStringDto>) -> Option<String> {
    value.and_then(|s| non_empty(s.value))
}

fn window_models(
    situation_id: &str,
    kind: &str,
    windows: Vec<TimeWindowDto>,
) -> impl Iterator<Item = entity::situation_window::ActiveModel> {
    let situation_id = situation_id.to_string();
    let kind = kind.to_string();

    windows
        .into_iter()
        .map(move |window| entity::situation_window::ActiveModel {
            situation_id: ActiveValue::Set(situation_id.clone()),
            kind: ActiveValue::Set(kind.clone()),
            from_time: ActiveValue::Set(window.from),
            to_time: ActiveValue::Set(Some(window.to).filter(|to| *to != 0)),
            ..Default::default()
        })
}

/// Windows with timestamps outside chrono's range are skipped
fn time_window(window: &entity::situation_window::Model) -> Option<TimeWindow> {
    let from = DateTime::from_timestamp_millis(window.from_time)?;
    let to = match window.to_time {
        Some(to) => Some(DateTime::from_timestamp_millis(to)?),
        None => None,
    };

    Some(TimeWindow { from, to })
}

fn collect_ids<'m>(ids: impl Iterator<Item = &'m Option<String>>) -> Vec<String> {
    let mut ids: Vec<String> = ids.flatten().cloned().collect();
    ids.sort();
    ids.dedup();
    ids
}
