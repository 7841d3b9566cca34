use std::sync::Arc;

use crate::{
    api::ObaClient,
    error::Error,
    model::region::Region,
    service::persistence::{region::RegionPersistenceRegistry, PersistenceService},
};

/// Application-wide context handed to every loader.
///
/// The API client is absent until a region has been selected, mirroring a freshly
/// installed app; loaders treat a missing client as a failed remote fetch.
#[derive(Clone)]
pub struct AppContext {
    pub registry: Arc<RegionPersistenceRegistry>,
    pub api_client: Option<ObaClient>,
    pub current_region: Option<Region>,
}

impl AppContext {
    pub fn new(
        registry: Arc<RegionPersistenceRegistry>,
        api_client: Option<ObaClient>,
        current_region: Option<Region>,
    ) -> Self {
        Self {
            registry,
            api_client,
            current_region,
        }
    }

    /// Persistence service of the currently selected region.
    ///
    /// # Panics
    /// Panics when no region is selected; callers must select a region before building
    /// screens that read from the cache.
    pub async fn persistence(&self) -> Result<PersistenceService, Error> {
        self.registry
            .service_for_region(self.current_region.as_ref())
            .await
    }
}
