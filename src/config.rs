use std::path::PathBuf;

use crate::{
    error::config::ConfigError,
    model::region::{Region, RegionIdentifier},
    service::persistence::DatabaseLocation,
};

pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub region_id: RegionIdentifier,
    pub region_name: String,
    pub database_location: DatabaseLocation,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let region_id = required("OBA_REGION_ID")?;
        let region_id = region_id
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "OBA_REGION_ID".to_string(),
                reason: e.to_string(),
            })?;

        let database_location = match var("OBA_DATABASE_LOCATION") {
            None => DatabaseLocation::Memory,
            Some(value) if value.eq_ignore_ascii_case("memory") => DatabaseLocation::Memory,
            Some(value) => DatabaseLocation::Directory(PathBuf::from(value)),
        };

        Ok(Self {
            api_url: required("OBA_API_URL")?,
            api_key: required("OBA_API_KEY")?,
            region_id: RegionIdentifier(region_id),
            region_name: var("OBA_REGION_NAME").unwrap_or_else(|| format!("Region {}", region_id)),
            database_location,
        })
    }

    /// The region this process serves
    pub fn region(&self) -> Region {
        Region::new(self.region_id, &self.region_name, &self.api_url)
    }
}
