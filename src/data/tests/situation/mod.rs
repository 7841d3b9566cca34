mod find_detailed;
mod find_many;

use super::*;

use crate::{data::situation::SituationRepository, model::api::SituationDto};

fn situation_dto(situation_id: &str, route_id: &str) -> Result<SituationDto, TestError> {
    Ok(serde_json::from_value(factory::mock_situation(
        situation_id,
        route_id,
    ))?)
}
