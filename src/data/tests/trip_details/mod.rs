mod get_situation_ids;
mod get_stop_times;
mod upsert;

use super::*;

use crate::{data::trip_details::TripDetailsRepository, model::api::TripDetailsDto};

fn trip_details_dto(
    trip_id: &str,
    previous_trip_id: Option<&str>,
    next_trip_id: Option<&str>,
    stop_ids: &[&str],
) -> Result<TripDetailsDto, TestError> {
    Ok(serde_json::from_value(factory::mock_trip_details(
        trip_id,
        previous_trip_id,
        next_trip_id,
        stop_ids,
    ))?)
}
