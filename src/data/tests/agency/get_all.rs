//! Tests for AgencyRepository::get_all method.

use super::*;

/// Tests that cached agencies are returned sorted by name.
///
/// Expected: Ok with agencies ordered "Agency 1", "Agency 2", "Agency 3"
#[tokio::test]
async fn returns_agencies_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Agency)
        .with_mock_agency("3")
        .with_mock_agency("1")
        .with_mock_agency("2")
        .build()
        .await?;

    let agency_repo = AgencyRepository::new(&test.db);
    let agencies = agency_repo.get_all().await?;

    let names: Vec<&str> = agencies.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Agency 1", "Agency 2", "Agency 3"]);

    Ok(())
}

/// Tests reading an empty cache.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_for_empty_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Agency)
        .build()
        .await?;

    let agency_repo = AgencyRepository::new(&test.db);
    let agencies = agency_repo.get_all().await?;

    assert!(agencies.is_empty());

    Ok(())
}

/// Tests reading without the agency table.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let agency_repo = AgencyRepository::new(&test.db);
    let result = agency_repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}
