mod get_by_agency_id;
mod upsert_many;

use super::*;

use crate::{data::route::RouteRepository, model::api::RouteDto};

fn route_dto(route_id: &str, agency_id: &str) -> Result<RouteDto, TestError> {
    Ok(serde_json::from_value(factory::mock_route(route_id, agency_id))?)
}
