//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Operations are queued by the chained methods and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up the cache schema, cached rows, and mock OneBusAway endpoints for a test.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_schema: bool,

    // Cached rows to insert
    agencies: Vec<String>,
    stops: Vec<(String, Option<String>)>, // (stop_id, parent_stop_id)
    trips: Vec<(String, String)>,         // (trip_id, route_id)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    agencies_endpoints: Vec<(Vec<String>, usize)>, // (agency_ids, expected_requests)
    stop_endpoints: Vec<(String, Option<String>, usize)>,
    trip_details_endpoints: Vec<(TripDetailsEndpoint, usize)>,
    failing_endpoints: Vec<(String, usize, usize)>, // (method, status, expected_requests)
}

struct TripDetailsEndpoint {
    trip_id: String,
    previous_trip_id: Option<String>,
    next_trip_id: Option<String>,
    stop_ids: Vec<String>,
    situation_ids: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_schema: false,
            agencies: Vec::new(),
            stops: Vec::new(),
            trips: Vec::new(),
            mock_builders: Vec::new(),
            agencies_endpoints: Vec::new(),
            stop_endpoints: Vec::new(),
            trip_details_endpoints: Vec::new(),
            failing_endpoints: Vec::new(),
        }
    }

    /// Create the full cache schema by running every migration.
    pub fn with_schema(mut self) -> Self {
        self.include_schema = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// ```no_run
    /// use obakit_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), obakit_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Agency)
    ///     .with_table(Route)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock agency into the cache.
    pub fn with_mock_agency(mut self, agency_id: &str) -> Self {
        self.agencies.push(agency_id.to_string());
        self
    }

    /// Insert a mock stop into the cache, optionally belonging to a parent station.
    pub fn with_mock_stop(mut self, stop_id: &str, parent_stop_id: Option<&str>) -> Self {
        self.stops
            .push((stop_id.to_string(), parent_stop_id.map(str::to_string)));
        self
    }

    /// Insert a mock trip into the cache.
    pub fn with_mock_trip(mut self, trip_id: &str, route_id: &str) -> Self {
        self.trips.push((trip_id.to_string(), route_id.to_string()));
        self
    }

    /// Add an `agencies-with-coverage` endpoint listing `agency_ids`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_agencies_endpoint(mut self, agency_ids: &[&str], expected_requests: usize) -> Self {
        self.agencies_endpoints.push((
            agency_ids.iter().map(|id| id.to_string()).collect(),
            expected_requests,
        ));
        self
    }

    /// Add a `stop/{stop_id}` endpoint.
    pub fn with_stop_endpoint(
        mut self,
        stop_id: &str,
        parent_stop_id: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        self.stop_endpoints.push((
            stop_id.to_string(),
            parent_stop_id.map(str::to_string),
            expected_requests,
        ));
        self
    }

    /// Add a `trip-details/{trip_id}` endpoint whose schedule visits `stop_ids` in order.
    pub fn with_trip_details_endpoint(
        mut self,
        trip_id: &str,
        previous_trip_id: Option<&str>,
        next_trip_id: Option<&str>,
        stop_ids: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.trip_details_endpoints.push((
            TripDetailsEndpoint {
                trip_id: trip_id.to_string(),
                previous_trip_id: previous_trip_id.map(str::to_string),
                next_trip_id: next_trip_id.map(str::to_string),
                stop_ids: stop_ids.iter().map(|id| id.to_string()).collect(),
                situation_ids: Vec::new(),
            },
            expected_requests,
        ));
        self
    }

    /// Create a `trip-details/{trip_id}` endpoint whose trip is affected by situations.
    pub fn with_trip_details_situations_endpoint(
        mut self,
        trip_id: &str,
        stop_ids: &[&str],
        situation_ids: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.trip_details_endpoints.push((
            TripDetailsEndpoint {
                trip_id: trip_id.to_string(),
                previous_trip_id: None,
                next_trip_id: None,
                stop_ids: stop_ids.iter().map(|id| id.to_string()).collect(),
                situation_ids: situation_ids.iter().map(|id| id.to_string()).collect(),
            },
            expected_requests,
        ));
        self
    }

    /// Add an endpoint for `method` that responds with the HTTP error `status`.
    pub fn with_failing_endpoint(
        mut self,
        method: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_endpoints
            .push((method.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the schema (migrations if requested, then custom tables)
    /// 2. Inserts cached rows (agencies, stops, trips)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_schema {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        // 2. Insert cached rows
        for agency_id in self.agencies {
            setup.oba().insert_mock_agency(&agency_id).await?;
        }

        for (stop_id, parent_stop_id) in self.stops {
            setup
                .oba()
                .insert_mock_stop(&stop_id, parent_stop_id.as_deref())
                .await?;
        }

        for (trip_id, route_id) in self.trips {
            setup.oba().insert_mock_trip(&trip_id, &route_id).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue an error before a success
        // on the same path.
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (agency_ids, expected) in self.agencies_endpoints {
            let ids: Vec<&str> = agency_ids.iter().map(String::as_str).collect();
            mocks.push(setup.oba().create_agencies_endpoint(&ids, expected));
        }

        for (stop_id, parent_stop_id, expected) in self.stop_endpoints {
            mocks.push(setup.oba().create_stop_endpoint(
                &stop_id,
                parent_stop_id.as_deref(),
                expected,
            ));
        }

        for (endpoint, expected) in self.trip_details_endpoints {
            let stop_ids: Vec<&str> = endpoint.stop_ids.iter().map(String::as_str).collect();
            let situation_ids: Vec<&str> =
                endpoint.situation_ids.iter().map(String::as_str).collect();
            mocks.push(setup.oba().create_trip_details_with_situations_endpoint(
                &endpoint.trip_id,
                endpoint.previous_trip_id.as_deref(),
                endpoint.next_trip_id.as_deref(),
                &stop_ids,
                &situation_ids,
                expected,
            ));
        }

        for (method, status, expected) in self.failing_endpoints {
            mocks.push(setup.oba().create_failing_endpoint(&method, status, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
