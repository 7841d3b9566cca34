mod find_many;
mod get_parent_stop;
mod upsert_many;

use super::*;

use crate::{data::stop::StopRepository, model::api::StopDto};

fn stop_dto(stop_id: &str, parent_stop_id: Option<&str>) -> Result<StopDto, TestError> {
    Ok(serde_json::from_value(factory::mock_stop(
        stop_id,
        parent_stop_id,
    ))?)
}
