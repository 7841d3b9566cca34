//! OneBusAway HTTP mock endpoint creation utilities.
//!
//! Each method registers a mock `GET /api/where/{method}.json` endpoint on the test's
//! mockito server. Query strings (the API key) are not matched. The returned mock verifies
//! it was called exactly `expected_requests` times when asserted.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::oba::{factory, ObaFixtures};

impl<'a> ObaFixtures<'a> {
    /// Serve `body` as the JSON response of an API method.
    pub fn create_method_endpoint(
        &mut self,
        method: &str,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/where/{}.json", method);

        self.setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create an `agencies-with-coverage` endpoint listing the given agencies.
    pub fn create_agencies_endpoint(
        &mut self,
        agency_ids: &[&str],
        expected_requests: usize,
    ) -> Mock {
        let list = agency_ids
            .iter()
            .map(|id| factory::mock_agency_with_coverage(id))
            .collect();
        let agencies = agency_ids.iter().map(|id| factory::mock_agency(id)).collect();
        let body = factory::list_response(
            list,
            factory::references(agencies, Vec::new(), Vec::new(), Vec::new()),
        );

        self.create_method_endpoint("agencies-with-coverage", &body, expected_requests)
    }

    /// Create a `stop/{stop_id}` endpoint.
    ///
    /// When the stop has a parent, the parent station is included in the references.
    pub fn create_stop_endpoint(
        &mut self,
        stop_id: &str,
        parent_stop_id: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let stops = parent_stop_id
            .map(|parent| vec![factory::mock_stop(parent, None)])
            .unwrap_or_default();
        let body = factory::entry_response(
            factory::mock_stop(stop_id, parent_stop_id),
            factory::references(vec![factory::mock_agency("1")], Vec::new(), stops, Vec::new()),
        );

        self.create_method_endpoint(&format!("stop/{}", stop_id), &body, expected_requests)
    }

    /// Create a `trip-details/{trip_id}` endpoint.
    ///
    /// The references contain the trip, its neighbouring trips, its route, and every stop
    /// in the schedule.
    pub fn create_trip_details_endpoint(
        &mut self,
        trip_id: &str,
        previous_trip_id: Option<&str>,
        next_trip_id: Option<&str>,
        stop_ids: &[&str],
        expected_requests: usize,
    ) -> Mock {
        self.create_trip_details_with_situations_endpoint(
            trip_id,
            previous_trip_id,
            next_trip_id,
            stop_ids,
            &[],
            expected_requests,
        )
    }

    /// Create a `trip-details/{trip_id}` endpoint whose trip is affected by situations.
    ///
    /// Each situation affects the trip's route and is included in the references.
    pub fn create_trip_details_with_situations_endpoint(
        &mut self,
        trip_id: &str,
        previous_trip_id: Option<&str>,
        next_trip_id: Option<&str>,
        stop_ids: &[&str],
        situation_ids: &[&str],
        expected_requests: usize,
    ) -> Mock {
        let route_id = "1_100224";
        let trips = [Some(trip_id), previous_trip_id, next_trip_id]
            .into_iter()
            .flatten()
            .map(|id| factory::mock_trip(id, route_id))
            .collect();
        let stops = stop_ids.iter().map(|id| factory::mock_stop(id, None)).collect();
        let situations = situation_ids
            .iter()
            .map(|id| factory::mock_situation(id, route_id))
            .collect();
        let body = factory::entry_response(
            factory::with_situation_ids(
                factory::mock_trip_details(trip_id, previous_trip_id, next_trip_id, stop_ids),
                situation_ids,
            ),
            factory::with_situations(
                factory::references(
                    vec![factory::mock_agency("1")],
                    vec![factory::mock_route(route_id, "1")],
                    stops,
                    trips,
                ),
                situations,
            ),
        );

        self.create_method_endpoint(
            &format!("trip-details/{}", trip_id),
            &body,
            expected_requests,
        )
    }

    /// Create an endpoint for an API method that fails with an HTTP status.
    pub fn create_failing_endpoint(
        &mut self,
        method: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/api/where/{}.json", method);

        self.setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
