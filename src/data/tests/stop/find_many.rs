//! Tests for StopRepository::find_many method.

use super::*;

/// Expected: Ok with only the cached stops, uncached IDs skipped
#[tokio::test]
async fn returns_cached_stops_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .with_mock_stop("1_100", None)
        .with_mock_stop("1_200", None)
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    let stops = stop_repo
        .find_many(&[
            "1_100".to_string(),
            "1_200".to_string(),
            "1_300".to_string(),
        ])
        .await?;

    assert_eq!(stops.len(), 2);
    assert!(stops.iter().all(|stop| stop.id != "1_300"));

    Ok(())
}

/// Expected: Ok with an empty Vec, no query issued
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let stop_repo = StopRepository::new(&test.db);
    let stops = stop_repo.find_many(&[]).await?;

    assert!(stops.is_empty());

    Ok(())
}
