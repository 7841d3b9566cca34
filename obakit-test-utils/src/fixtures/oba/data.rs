//! Cached row fixtures.
//!
//! These insert rows straight into the test database, bypassing the API, to simulate a
//! cache that was populated by an earlier session.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, fixtures::oba::ObaFixtures};

impl<'a> ObaFixtures<'a> {
    /// Insert an agency named `Agency {agency_id}` into the cache.
    pub async fn insert_mock_agency(
        &mut self,
        agency_id: &str,
    ) -> Result<entity::agency::Model, TestError> {
        let agency = entity::agency::ActiveModel {
            id: ActiveValue::Set(agency_id.to_string()),
            name: ActiveValue::Set(format!("Agency {}", agency_id)),
            url: ActiveValue::Set(format!("https://agency{}.example.com", agency_id)),
            timezone: ActiveValue::Set("America/Los_Angeles".to_string()),
            lang: ActiveValue::Set(Some("en".to_string())),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            fare_url: ActiveValue::Set(None),
            disclaimer: ActiveValue::Set(None),
            private_service: ActiveValue::Set(false),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(agency.insert(&self.setup.db).await?)
    }

    /// Insert a stop into the cache, optionally belonging to a parent station.
    pub async fn insert_mock_stop(
        &mut self,
        stop_id: &str,
        parent_stop_id: Option<&str>,
    ) -> Result<entity::stop::Model, TestError> {
        let stop = entity::stop::ActiveModel {
            id: ActiveValue::Set(stop_id.to_string()),
            name: ActiveValue::Set(format!("Stop {}", stop_id)),
            code: ActiveValue::Set(Some(stop_id.to_string())),
            direction: ActiveValue::Set(Some("N".to_string())),
            latitude: ActiveValue::Set(47.654365),
            longitude: ActiveValue::Set(-122.305214),
            location_type: ActiveValue::Set(0),
            wheelchair_boarding: ActiveValue::Set(None),
            parent_stop_id: ActiveValue::Set(parent_stop_id.map(str::to_string)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(stop.insert(&self.setup.db).await?)
    }

    /// Insert a trip into the cache.
    pub async fn insert_mock_trip(
        &mut self,
        trip_id: &str,
        route_id: &str,
    ) -> Result<entity::trip::Model, TestError> {
        let trip = entity::trip::ActiveModel {
            id: ActiveValue::Set(trip_id.to_string()),
            route_id: ActiveValue::Set(route_id.to_string()),
            service_id: ActiveValue::Set("1_WEEKDAY".to_string()),
            shape_id: ActiveValue::Set(None),
            direction_id: ActiveValue::Set(Some("0".to_string())),
            block_id: ActiveValue::Set(None),
            headsign: ActiveValue::Set(Some("University District".to_string())),
            short_name: ActiveValue::Set(None),
            route_short_name: ActiveValue::Set(None),
            time_zone: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(trip.insert(&self.setup.db).await?)
    }
}
