//! Tests for TripDetailsRepository::upsert method.

use super::*;

/// Tests storing trip details with neighbouring trips.
///
/// Expected: Ok with previous/next trip IDs and the schedule's time zone stored
#[tokio::test]
async fn stores_trip_details() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TripDetailsRepository::new(&test.db);
    let details = repo
        .upsert(trip_details_dto(
            "1_604670535",
            Some("1_604670534"),
            None,
            &["1_100", "1_200"],
        )?)
        .await?;

    assert_eq!(details.trip_id, "1_604670535");
    assert_eq!(details.previous_trip_id.as_deref(), Some("1_604670534"));
    assert_eq!(details.next_trip_id, None);
    assert_eq!(details.time_zone.as_deref(), Some("America/Los_Angeles"));

    Ok(())
}

/// Tests that storing trip details again replaces the cached schedule.
///
/// Expected: Ok with only the stop times of the second schedule
#[tokio::test]
async fn replaces_existing_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TripDetailsRepository::new(&test.db);
    repo.upsert(trip_details_dto(
        "1_604670535",
        None,
        None,
        &["1_100", "1_200", "1_300"],
    )?)
    .await?;
    repo.upsert(trip_details_dto(
        "1_604670535",
        None,
        None,
        &["1_100", "1_300"],
    )?)
    .await?;

    let stop_times = repo.get_stop_times("1_604670535").await?;
    let stop_ids: Vec<&str> = stop_times.iter().map(|st| st.stop_id.as_str()).collect();
    assert_eq!(stop_ids, vec!["1_100", "1_300"]);

    Ok(())
}

/// Tests trip details without a schedule.
///
/// Expected: Ok with no stop times cached
#[tokio::test]
async fn stores_details_without_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;
    let mut dto = trip_details_dto("1_604670535", None, None, &[])?;
    dto.schedule = None;

    let repo = TripDetailsRepository::new(&test.db);
    let details = repo.upsert(dto).await?;

    assert_eq!(details.time_zone, None);
    assert!(repo.get_stop_times("1_604670535").await?.is_empty());

    Ok(())
}
