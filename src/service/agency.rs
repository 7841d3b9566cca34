use std::sync::Arc;

use crate::{
    api::ObaClient,
    data::agency::AgencyRepository,
    error::{api::ApiError, Error},
    model::app::AppContext,
    service::{orchestrator::FetchOrchestrator, persistence::PersistenceService},
};

/// Fetch hooks of the agencies list.
pub struct AgencyService {
    persistence: PersistenceService,
    api_client: Option<ObaClient>,
}

impl AgencyService {
    pub fn new(persistence: PersistenceService, api_client: Option<ObaClient>) -> Self {
        Self {
            persistence,
            api_client,
        }
    }

    /// Creates an [`AgencyService`] for the application's current region
    pub async fn for_app(app: &AppContext) -> Result<Self, Error> {
        Ok(Self::new(app.persistence().await?, app.api_client.clone()))
    }

    /// Refreshes the region's agencies from the API
    pub async fn fetch_from_remote(&self) -> Result<(), Error> {
        let api_client = self.api_client.as_ref().ok_or(ApiError::NoApiService)?;

        let response = api_client.get_agencies_with_coverage().await?;

        self.persistence.process_api_response(response).await
    }

    /// Reads the cached agencies sorted by name
    pub async fn fetch_from_persistence(
        &self,
    ) -> Result<Option<Vec<entity::agency::Model>>, Error> {
        let agencies = AgencyRepository::new(self.persistence.db())
            .get_all()
            .await?;

        Ok(Some(agencies))
    }

    /// Wraps this service's hooks in a [`FetchOrchestrator`]
    pub fn into_orchestrator<H>(
        self,
        on_outcome_updated: H,
    ) -> FetchOrchestrator<Vec<entity::agency::Model>>
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
