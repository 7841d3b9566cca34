mod find_by_id;
mod get_all;

use super::*;

use crate::{data::agency::AgencyRepository, model::api::AgencyDto};

fn agency_dto(agency_id: &str) -> Result<AgencyDto, TestError> {
    Ok(serde_json::from_value(factory::mock_agency(agency_id))?)
}
