//! Tests for SituationRepository::find_detailed method.

use chrono::{DateTime, Utc};

use super::*;

use crate::model::situation::TimeWindow;

fn millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

/// Tests assembling a situation with its windows and cached affected entities.
///
/// Expected: Ok with both window kinds and the cached agency, route missing from the cache
#[tokio::test]
async fn assembles_windows_and_affected_entities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_agency("1")
        .build()
        .await?;
    let repo = SituationRepository::new(&test.db);
    repo.upsert_many(vec![situation_dto("1_alert_1", "1_100224")?])
        .await?;

    let detailed = repo.find_detailed("1_alert_1").await?.unwrap();

    assert_eq!(detailed.situation.id, "1_alert_1");
    assert_eq!(
        detailed.active_windows,
        vec![TimeWindow {
            from: millis(1_700_000_000_000),
            to: Some(millis(1_700_086_400_000)),
        }]
    );
    assert_eq!(
        detailed.publication_windows,
        vec![TimeWindow {
            from: millis(1_699_990_000_000),
            to: None,
        }]
    );
    let agency_ids: Vec<&str> = detailed
        .affected_agencies
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(agency_ids, vec!["1"]);
    assert!(detailed.affected_routes.is_empty());
    assert!(detailed.affected_stops.is_empty());
    assert!(detailed.affected_trips.is_empty());

    assert!(detailed.is_active_at(millis(1_700_050_000_000)));
    assert!(!detailed.is_active_at(millis(1_700_100_000_000)));

    Ok(())
}

/// Tests looking up a situation that was never cached.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_situation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let detailed = SituationRepository::new(&test.db)
        .find_detailed("1_alert_9")
        .await?;

    assert!(detailed.is_none());

    Ok(())
}
