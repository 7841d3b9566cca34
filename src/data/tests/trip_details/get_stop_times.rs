//! Tests for TripDetailsRepository::get_stop_times method.

use super::*;

/// Expected: Ok with stop times in schedule order and only for the requested trip
#[tokio::test]
async fn returns_stop_times_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TripDetailsRepository::new(&test.db);
    repo.upsert(trip_details_dto(
        "1_604670535",
        None,
        None,
        &["1_300", "1_100", "1_200"],
    )?)
    .await?;
    repo.upsert(trip_details_dto("1_604670536", None, None, &["1_900"])?)
        .await?;

    let stop_times = repo.get_stop_times("1_604670535").await?;

    let sequence: Vec<(i32, &str)> = stop_times
        .iter()
        .map(|st| (st.stop_sequence, st.stop_id.as_str()))
        .collect();
    assert_eq!(sequence, vec![(0, "1_300"), (1, "1_100"), (2, "1_200")]);
    assert!(stop_times[1].arrival_time > stop_times[0].arrival_time);

    Ok(())
}

/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_schema().build().await?;

    let repo = TripDetailsRepository::new(&test.db);
    let stop_times = repo.get_stop_times("1_404").await?;

    assert!(stop_times.is_empty());

    Ok(())
}
