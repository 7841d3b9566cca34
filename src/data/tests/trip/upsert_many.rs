//! Tests for TripRepository::upsert_many method.

use super::*;

/// Expected: Ok with headsign stored and empty short names stored as NULL
#[tokio::test]
async fn upserts_new_trips() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Trip)
        .build()
        .await?;

    let trip_repo = TripRepository::new(&test.db);
    let created = trip_repo
        .upsert_many(vec![
            trip_dto("1_604670535", "1_100224")?,
            trip_dto("1_604670536", "1_100224")?,
        ])
        .await?;

    assert_eq!(created.len(), 2);
    let trip = trip_repo.find_by_id("1_604670535").await?.unwrap();
    assert_eq!(trip.headsign.as_deref(), Some("University District"));
    assert_eq!(trip.short_name, None);

    Ok(())
}

/// Expected: Ok with the cached trip moved to the new route
#[tokio::test]
async fn updates_existing_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Trip)
        .with_mock_trip("1_604670535", "1_100224")
        .build()
        .await?;

    let trip_repo = TripRepository::new(&test.db);
    trip_repo
        .upsert_many(vec![trip_dto("1_604670535", "1_100252")?])
        .await?;

    let trip = trip_repo.find_by_id("1_604670535").await?.unwrap();
    assert_eq!(trip.route_id, "1_100252");

    Ok(())
}
