//! Tests for StopRepository::upsert_many method.

use super::*;

/// Tests that a stop without a parent stores NULL instead of the `""` placeholder.
///
/// Expected: Ok with `parent_stop_id` set to None
#[tokio::test]
async fn stores_missing_parent_as_null() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    let created = stop_repo.upsert_many(vec![stop_dto("1_75403", None)?]).await?;

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].parent_stop_id, None);
    assert_eq!(created[0].name, "Stop 1_75403");

    Ok(())
}

/// Tests that a child stop may be stored before its parent station.
///
/// Expected: Ok with `parent_stop_id` set although the parent is not cached
#[tokio::test]
async fn stores_child_before_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    let created = stop_repo
        .upsert_many(vec![stop_dto("1_75403", Some("1_75400"))?])
        .await?;

    assert_eq!(created[0].parent_stop_id.as_deref(), Some("1_75400"));
    assert!(stop_repo.find_by_id("1_75400").await?.is_none());

    Ok(())
}

/// Tests that an update may attach a parent to a cached stop.
///
/// Expected: Ok with the cached stop now pointing at its parent
#[tokio::test]
async fn updates_parent_of_existing_stop() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .with_mock_stop("1_75403", None)
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    stop_repo
        .upsert_many(vec![stop_dto("1_75403", Some("1_75400"))?])
        .await?;

    let stop = stop_repo.find_by_id("1_75403").await?.unwrap();
    assert_eq!(stop.parent_stop_id.as_deref(), Some("1_75400"));

    Ok(())
}
