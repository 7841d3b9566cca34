use std::sync::Arc;

use crate::{
    api::ObaClient,
    data::{
        situation::SituationRepository, stop::StopRepository, trip::TripRepository,
        trip_details::TripDetailsRepository,
    },
    error::{api::ApiError, Error},
    model::{app::AppContext, trip::TripDetailsViewModel},
    service::{orchestrator::FetchOrchestrator, persistence::PersistenceService},
};

/// Fetch hooks of the trip detail timeline.
pub struct TripService {
    persistence: PersistenceService,
    api_client: Option<ObaClient>,
    trip_id: String,
}

impl TripService {
    pub fn new(
        persistence: PersistenceService,
        api_client: Option<ObaClient>,
        trip_id: &str,
    ) -> Self {
        Self {
            persistence,
            api_client,
            trip_id: trip_id.to_string(),
        }
    }

    /// Creates a [`TripService`] for a trip of the application's current region
    pub async fn for_app(app: &AppContext, trip_id: &str) -> Result<Self, Error> {
        Ok(Self::new(
            app.persistence().await?,
            app.api_client.clone(),
            trip_id,
        ))
    }

    /// Refreshes the trip details with their schedule, referenced entities and situations
    pub async fn fetch_from_remote(&self) -> Result<(), Error> {
        let api_client = self.api_client.as_ref().ok_or(ApiError::NoApiService)?;

        let response = api_client.get_trip_details(&self.trip_id).await?;

        self.persistence.process_api_response(response).await
    }

    /// Assembles the trip detail view model from the cache
    ///
    /// # Returns
    /// - `Some`: Trip details and the trip itself are cached
    /// - `None`: Either is missing, the trip has never been fetched
    pub async fn fetch_from_persistence(&self) -> Result<Option<TripDetailsViewModel>, Error> {
        let db = self.persistence.db();
        let trip_repo = TripRepository::new(db);
        let trip_details_repo = TripDetailsRepository::new(db);

        let Some(trip_details) = trip_details_repo.find_by_trip_id(&self.trip_id).await? else {
            return Ok(None);
        };
        let Some(trip) = trip_repo.find_by_id(&self.trip_id).await? else {
            return Ok(None);
        };

        let previous_trip = match &trip_details.previous_trip_id {
            Some(trip_id) => trip_repo.find_by_id(trip_id).await?,
            None => None,
        };
        let next_trip = match &trip_details.next_trip_id {
            Some(trip_id) => trip_repo.find_by_id(trip_id).await?,
            None => None,
        };

        let stop_times = trip_details_repo.get_stop_times(&self.trip_id).await?;

        let mut stop_ids: Vec<String> = stop_times.iter().map(|st| st.stop_id.clone()).collect();
        stop_ids.sort();
        stop_ids.dedup();

        let stops = StopRepository::new(db)
            .find_many(&stop_ids)
            .await?
            .into_iter()
            .map(|stop| (stop.id.clone(), stop))
            .collect();

        let situation_ids = trip_details_repo.get_situation_ids(&self.trip_id).await?;
        let situations = SituationRepository::new(db)
            .find_many(&situation_ids)
            .await?
            .into_iter()
            .map(|situation| (situation.id.clone(), situation))
            .collect();

        Ok(Some(TripDetailsViewModel {
            trip_details,
            trip,
            previous_trip,
            next_trip,
            stop_times,
            stops,
            situations,
        }))
    }

    /// Wraps this service's hooks in a [`FetchOrchestrator`]
    pub fn into_orchestrator<H>(
        self,
        on_outcome_updated: H,
    ) -> FetchOrchestrator<TripDetailsViewModel>
    where
        H: Fn() + Send + Sync + 'static,
    {
        let remote = Arc::new(self);
        let local = remote.clone();

        FetchOrchestrator::new(
            move |_| {
                let service = remote.clone();
                async move { service.fetch_from_remote().await }
            },
            move |_| {
                let service = local.clone();
                async move { service.fetch_from_persistence().await }
            },
            on_outcome_updated,
        )
    }
}
