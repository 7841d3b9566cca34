//! Tests for TripDetailsRepository::get_situation_ids method.

use super::*;

/// Tests that a trip's situation IDs are stored once each.
///
/// Expected: Ok with the de-duplicated IDs in ascending order
#[tokio::test]
async fn returns_stored_situation_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let mut dto = trip_details_dto("1_604670535", None, None, &["1_100"])?;
    dto.situation_ids = vec![
        "1_alert_2".to_string(),
        "1_alert_1".to_string(),
        "1_alert_2".to_string(),
    ];

    let repo = TripDetailsRepository::new(&test.db);
    repo.upsert(dto).await?;

    let situation_ids = repo.get_situation_ids("1_604670535").await?;
    assert_eq!(situation_ids, vec!["1_alert_1", "1_alert_2"]);

    Ok(())
}

/// Tests that storing trip details again replaces the trip's situation IDs.
///
/// Expected: Ok with only the IDs of the second response
#[tokio::test]
async fn replaces_situation_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let repo = TripDetailsRepository::new(&test.db);

    let mut first = trip_details_dto("1_604670535", None, None, &["1_100"])?;
    first.situation_ids = vec!["1_alert_1".to_string()];
    repo.upsert(first).await?;

    let second = trip_details_dto("1_604670535", None, None, &["1_100"])?;
    repo.upsert(second).await?;

    assert!(repo.get_situation_ids("1_604670535").await?.is_empty());

    Ok(())
}

/// Tests that situation IDs of other trips are not returned.
///
/// Expected: Ok with an empty list for a trip without situations
#[tokio::test]
async fn ignores_other_trips() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let repo = TripDetailsRepository::new(&test.db);

    let mut affected = trip_details_dto("1_604670535", None, None, &["1_100"])?;
    affected.situation_ids = vec!["1_alert_1".to_string()];
    repo.upsert(affected).await?;
    repo.upsert(trip_details_dto("1_604670536", None, None, &["1_100"])?)
        .await?;

    assert!(repo.get_situation_ids("1_604670536").await?.is_empty());

    Ok(())
}
