//! Tests for AgencyRepository::find_by_id method.

use super::*;

/// Expected: Ok(Some(agency)) with matching agency data
#[tokio::test]
async fn finds_existing_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Agency)
        .with_mock_agency("1")
        .build()
        .await?;

    let agency_repo = AgencyRepository::new(&test.db);
    let result = agency_repo.find_by_id("1").await?;

    assert!(result.is_some());
    let agency = result.unwrap();
    assert_eq!(agency.id, "1");
    assert_eq!(agency.name, "Agency 1");

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Agency)
        .build()
        .await?;

    let agency_repo = AgencyRepository::new(&test.db);
    let result = agency_repo.find_by_id("404").await?;

    assert!(result.is_none());

    Ok(())
}
