//! Tests for SituationRepository::find_many method.

use super::*;

/// Tests finding cached situations by ID.
///
/// Expected: Ok with only the cached situations, unknown IDs skipped
#[tokio::test]
async fn finds_cached_situations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let repo = SituationRepository::new(&test.db);
    repo.upsert_many(vec![
        situation_dto("1_alert_1", "1_100224")?,
        situation_dto("1_alert_2", "1_100224")?,
    ])
    .await?;

    let mut situations = repo
        .find_many(&["1_alert_2".to_string(), "1_alert_9".to_string()])
        .await?;
    situations.sort_by(|a, b| a.id.cmp(&b.id));

    let ids: Vec<&str> = situations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1_alert_2"]);

    Ok(())
}

/// Tests finding situations without IDs.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let situations = SituationRepository::new(&test.db).find_many(&[]).await?;

    assert!(situations.is_empty());

    Ok(())
}
