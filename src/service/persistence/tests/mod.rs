
use obakit_test_utils::prelude::*;

use super::*;

use crate::{
    model::{api::ApiResponse, region::Region},
    service::persistence::region::RegionPersistenceRegistry,
    util::test::TestContextExt,
};

/// Decode the `data` object of a factory-built response envelope
fn response_data<D: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<D, TestError> {
    let response: ApiResponse<D> = serde_json::from_value(body)?;

    Ok(response.data.expect("factory responses always carry data"))
}
