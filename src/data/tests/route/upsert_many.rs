//! Tests for RouteRepository::upsert_many method.

use super::*;

/// Tests upserting a route before its agency is cached.
///
/// References arrive in any order, so routes must not depend on a cached agency.
///
/// Expected: Ok with the route stored and its `type` mapped to `route_type`
#[tokio::test]
async fn upserts_route_without_cached_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Route)
        .build()
        .await?;

    let route_repo = RouteRepository::new(&test.db);
    let created = route_repo
        .upsert_many(vec![route_dto("1_100224", "1")?])
        .await?;

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].agency_id, "1");
    assert_eq!(created[0].route_type, 3);
    assert_eq!(created[0].short_name.as_deref(), Some("44"));
    assert_eq!(created[0].color, None);

    Ok(())
}

/// Tests updating an existing route.
///
/// Expected: Ok with the route's long name replaced
#[tokio::test]
async fn updates_existing_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Route)
        .build()
        .await?;
    let mut updated = route_dto("1_100224", "1")?;
    updated.long_name = "Ballard - University District".to_string();

    let route_repo = RouteRepository::new(&test.db);
    route_repo
        .upsert_many(vec![route_dto("1_100224", "1")?])
        .await?;
    route_repo.upsert_many(vec![updated]).await?;

    let route = route_repo.find_by_id("1_100224").await?.unwrap();
    assert_eq!(
        route.long_name.as_deref(),
        Some("Ballard - University District")
    );

    Ok(())
}
