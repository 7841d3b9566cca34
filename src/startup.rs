use std::sync::Arc;

use crate::{
    api::ObaClient, config::Config, error::Error, model::app::AppContext,
    service::persistence::region::RegionPersistenceRegistry,
};

/// Build the OneBusAway API client for the configured server
pub fn build_api_client(config: &Config) -> Result<ObaClient, Error> {
    ObaClient::new(&config.api_url, &config.api_key)
}

/// Build the registry of region stores at the configured location
pub fn build_registry(config: &Config) -> Arc<RegionPersistenceRegistry> {
    Arc::new(RegionPersistenceRegistry::new(
        config.database_location.clone(),
    ))
}

/// Build the application context with the configured region selected
pub fn build_app_context(config: &Config) -> Result<AppContext, Error> {
    let api_client = build_api_client(config)?;
    let registry = build_registry(config);

    Ok(AppContext::new(
        registry,
        Some(api_client),
        Some(config.region()),
    ))
}
