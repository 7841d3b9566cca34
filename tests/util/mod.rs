//! Test utilities wiring a `TestContext` into the crate's services.

use std::sync::Arc;

use obakit::{
    api::ObaClient,
    model::{
        app::AppContext,
        region::{Region, RegionIdentifier},
    },
    service::persistence::{region::RegionPersistenceRegistry, PersistenceService},
};
use obakit_test_utils::{prelude::*, TestContext};

/// Extension trait for TestContext to build services against the mock environment
pub trait TestContextExt {
    /// Persistence service backed by the test database
    fn persistence(&self) -> impl std::future::Future<Output = PersistenceService> + Send;

    /// API client pointed at the mock OneBusAway server
    fn api_client(&self) -> ObaClient;

    /// Region served by the mock OneBusAway server
    fn region(&self) -> Region;

    /// Application context with the test region selected and a fresh in-memory registry
    fn app_context(&self) -> AppContext;
}

impl TestContextExt for TestContext {
    fn persistence(&self) -> impl std::future::Future<Output = PersistenceService> + Send {
        let db = self.db.clone();

        async move {
            PersistenceService::from_connection(RegionIdentifier(TEST_REGION_ID), db)
                .await
                .expect("Failed to open test store")
        }
    }

    fn api_client(&self) -> ObaClient {
        ObaClient::new(&self.api_url(), TEST_API_KEY).expect("Failed to build API client")
    }

    fn region(&self) -> Region {
        Region::new(TEST_REGION_ID, "Test Region", &self.api_url())
    }

    fn app_context(&self) -> AppContext {
        AppContext::new(
            Arc::new(RegionPersistenceRegistry::in_memory()),
            Some(self.api_client()),
            Some(self.region()),
        )
    }
}
