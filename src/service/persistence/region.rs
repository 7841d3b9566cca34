use std::collections::HashMap;

use dioxus_logger::tracing;
use tokio::sync::Mutex;

use crate::{
    error::Error,
    model::region::{Region, RegionIdentifier},
    service::persistence::{DatabaseLocation, PersistenceService},
};

/// Lazily creates and caches one [`PersistenceService`] per region.
///
/// Stores are created on first request and kept for the registry's lifetime, so every
/// caller asking for the same region shares one store. The map is guarded by an async
/// mutex held across store construction, which makes get-or-create atomic.
pub struct RegionPersistenceRegistry {
    location: DatabaseLocation,
    services: Mutex<HashMap<RegionIdentifier, PersistenceService>>,
}

impl RegionPersistenceRegistry {
    pub fn new(location: DatabaseLocation) -> Self {
        Self {
            location,
            services: Mutex::new(HashMap::new()),
        }
    }

    /// Registry whose region stores are in-memory databases
    pub fn in_memory() -> Self {
        Self::new(DatabaseLocation::Memory)
    }

    /// Get the persistence service of `region`, creating its store on first request
    ///
    /// # Returns
    /// - `Ok(PersistenceService)`: The region's service, identical for every call with the
    ///   same region
    /// - `Err(Error::PersistenceError)`: The store could not be opened or migrated, nothing
    ///   is registered and a later call will try again
    pub async fn service_for(&self, region: RegionIdentifier) -> Result<PersistenceService, Error> {
        let mut services = self.services.lock().await;

        if let Some(service) = services.get(&region) {
            return Ok(service.clone());
        }

        let service = PersistenceService::open(region, &self.location)
            .await
            .inspect_err(|e| tracing::error!("{}", e))?;

        tracing::info!("Created local store for region {}", region);

        services.insert(region, service.clone());

        Ok(service)
    }

    /// Get the persistence service of the selected region
    ///
    /// # Panics
    /// Panics with "No region" when `region` is `None`; screens that read from the cache
    /// must not be built before a region is selected.
    pub async fn service_for_region(
        &self,
        region: Option<&Region>,
    ) -> Result<PersistenceService, Error> {
        let Some(region) = region else {
            panic!("No region");
        };

        self.service_for(region.region_identifier()).await
    }

    /// Number of regions with a live store
    pub async fn len(&self) -> usize {
        self.services.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.services.lock().await.is_empty()
    }

    pub async fn contains(&self, region: RegionIdentifier) -> bool {
        self.services.lock().await.contains_key(&region)
    }
}

impl Default for RegionPersistenceRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}
