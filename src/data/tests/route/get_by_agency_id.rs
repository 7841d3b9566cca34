//! Tests for RouteRepository::get_by_agency_id method.

use super::*;

/// Expected: Ok with only the routes of agency "1"
#[tokio::test]
async fn returns_routes_of_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Route)
        .build()
        .await?;

    let route_repo = RouteRepository::new(&test.db);
    route_repo
        .upsert_many(vec![
            route_dto("1_100224", "1")?,
            route_dto("1_100252", "1")?,
            route_dto("40_100236", "40")?,
        ])
        .await?;

    let routes = route_repo.get_by_agency_id("1").await?;

    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|route| route.agency_id == "1"));

    Ok(())
}

/// Expected: Ok with an empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Route)
        .build()
        .await?;

    let route_repo = RouteRepository::new(&test.db);
    let routes = route_repo.get_by_agency_id("1").await?;

    assert!(routes.is_empty());

    Ok(())
}
