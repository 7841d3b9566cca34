mod upsert_many;

use super::*;

use crate::{data::trip::TripRepository, model::api::TripDto};

fn trip_dto(trip_id: &str, route_id: &str) -> Result<TripDto, TestError> {
    Ok(serde_json::from_value(factory::mock_trip(trip_id, route_id))?)
}
