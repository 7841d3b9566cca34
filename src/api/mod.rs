//! OneBusAway REST API client.
//!
//! Provides [`ObaClient`], a thin typed wrapper over the `/api/where/*.json` methods the
//! loaders need. Every call unwraps the standard response envelope and fails with
//! [`ApiError`] when the envelope reports anything other than success.

use std::time::Duration;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    error::{api::ApiError, Error},
    model::api::{
        AgencyWithCoverageDto, ApiResponse, EntryData, ListData, StopDto, TripDetailsDto,
    },
};

/// User agent sent with every request.
pub static USER_AGENT: &str = concat!("OBAKit/", env!("CARGO_PKG_VERSION"));

/// Timeout applied to each request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ObaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ObaClient {
    /// Creates a client for the OneBusAway server at `base_url`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Agencies serving the region and their coverage areas.
    ///
    /// The agencies themselves arrive in the response's references.
    pub async fn get_agencies_with_coverage(
        &self,
    ) -> Result<ListData<AgencyWithCoverageDto>, Error> {
        self.get("agencies-with-coverage").await
    }

    pub async fn get_stop(&self, stop_id: &str) -> Result<EntryData<StopDto>, Error> {
        self.get(&format!("stop/{}", stop_id)).await
    }

    pub async fn get_trip_details(
        &self,
        trip_id: &str,
    ) -> Result<EntryData<TripDetailsDto>, Error> {
        self.get(&format!("trip-details/{}", trip_id)).await
    }

    async fn get<D: DeserializeOwned>(&self, method: &str) -> Result<D, Error> {
        let url = format!("{}/api/where/{}.json", self.base_url, method);

        tracing::debug!("GET {}", url);

        let response: ApiResponse<D> = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.code != 200 {
            return Err(ApiError::UnexpectedCode {
                code: response.code,
                text: response.text,
            }
            .into());
        }

        response
            .data
            .ok_or_else(|| ApiError::MissingData(method.to_string()).into())
    }
}
