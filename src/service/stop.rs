use std::sync::Arc;

use crate::{
    api::ObaClient,
    data::stop::StopRepository,
    error::{api::ApiError, Error},
    model::{app::AppContext, stop::StopDetails},
    service::{orchestrator::FetchOrchestrator, persistence::PersistenceService},
};

/// Fetch hooks of the stop detail screen.
pub struct StopService {
    persistence: PersistenceService,
    api_client: Option<ObaClient>,
    stop_id: String,
}

impl StopService {
    pub fn new(
        persistence: PersistenceService,
        api_client: Option<ObaClient>,
        stop_id: &str,
    ) -> Self {
        Self {
            persistence,
            api_client,
            stop_id: stop_id.to_string(),
        }
    }

    /// Creates a [`StopService`] for a stop of the application's current region
    pub async fn for_app(app: &AppContext, stop_id: &str) -> Result<Self, Error> {
        Ok(Self::new(
            app.persistence().await?,
            app.api_client.clone(),
            stop_id,
        ))
    }

    /// Refreshes the stop from the API
    ///
    /// The response references include the parent station, if the stop has one.
    pub async fn fetch_from_remote(&self) -> Result<(), Error> {
        let api_client = self.api_client.as_ref().ok_or(ApiError::NoApiService)?;

        let response = api_client.get_stop(&self.stop_id).await?;

        self.persistence.process_api_response(response).await
    }

    /// Reads the cached stop and its parent station
    ///
    /// # Returns
    /// - `Some`: The stop is cached, `parent_stop` is set when its parent is cached too
    /// - `None`: The stop has never been fetched
    pub async fn fetch_from_persistence(&self) -> Result<Option<StopDetails>, Error> {
        let stop_repo = StopRepository::new(self.persistence.db());

        let Some(stop) = stop_repo.find_by_id(&self.stop_id).await? else {
            return Ok(None);
        };

        let parent_stop = match &stop.parent_stop_id {
            Some(parent_id) => stop_repo.find_by_id(parent_id).await?,
            None => None,
        };

        Ok(Some(StopDetails { stop, parent_stop }))
    }

    /// Wraps this service's hooks in a [`FetchOrchestrator`]
    pub fn into_orchestrator<H>(self, on_outcome_updated: H) -> FetchOrchestrator<StopDetails>
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
