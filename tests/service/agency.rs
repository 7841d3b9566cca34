use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use obakit::service::agency::AgencyService;

use super::*;

fn names(agencies: &[entity::agency::Model]) -> Vec<&str> {
    agencies.iter().map(|agency| agency.name.as_str()).collect()
}

/// Expect agencies fetched from the API to be persisted and served online
#[tokio::test]
async fn loads_agencies_from_api() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_agencies_endpoint(&["1", "40"], 1)
        .build()
        .await?;
    let service = AgencyService::new(test.persistence().await, Some(test.api_client()));
    let orchestrator = service.into_orchestrator(|| {});

    let cycle = orchestrator.load().await;

    assert_eq!(cycle, CycleOutcome::Published);
    let result = orchestrator.outcome().unwrap().unwrap();
    assert!(!result.is_offline);
    assert_eq!(names(&result.data.unwrap()), vec!["Agency 1", "Agency 40"]);
    test.assert_mocks();

    Ok(())
}

/// Expect cached agencies to be served offline when the API fails
#[tokio::test]
async fn serves_cached_agencies_when_api_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_agency("1")
        .with_failing_endpoint("agencies-with-coverage", 500, 1)
        .build()
        .await?;
    let service = AgencyService::new(test.persistence().await, Some(test.api_client()));
    let orchestrator = service.into_orchestrator(|| {});

    orchestrator.load().await;

    let result = orchestrator.outcome().unwrap().unwrap();
    assert!(result.is_offline);
    assert_eq!(names(&result.data.unwrap()), vec!["Agency 1"]);
    assert_eq!(orchestrator.status(), LoadStatus::Succeeded);
    test.assert_mocks();

    Ok(())
}

/// Expect an online load followed by an offline load to serve what the first one cached
#[tokio::test]
async fn offline_reload_serves_previously_fetched_agencies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_endpoint(|server| {
            let body = factory::list_response(
                vec![
                    factory::mock_agency_with_coverage("1"),
                    factory::mock_agency_with_coverage("40"),
                ],
                factory::references(
                    vec![factory::mock_agency("1"), factory::mock_agency("40")],
                    Vec::new(),
                    Vec::new(),
                    Vec::new(),
                ),
            );

            server
                .mock("GET", "/api/where/agencies-with-coverage.json")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(1)
                .create()
        })
        .with_failing_endpoint("agencies-with-coverage", 503, 1)
        .build()
        .await?;
    let persistence = test.persistence().await;

    // Mocks on the same path are served in creation order
    let online = AgencyService::new(persistence.clone(), Some(test.api_client()))
        .into_orchestrator(|| {});
    online.load().await;
    let first = online.outcome().unwrap().unwrap();
    assert!(!first.is_offline);

    let offline = AgencyService::new(persistence, Some(test.api_client())).into_orchestrator(|| {});
    offline.load().await;
    let second = offline.outcome().unwrap().unwrap();
    assert!(second.is_offline);
    assert_eq!(names(&second.data.unwrap()), vec!["Agency 1", "Agency 40"]);

    Ok(())
}

/// Expect a missing API client to count as a failed refresh
#[tokio::test]
async fn missing_api_client_marks_result_offline() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_schema()
        .with_mock_agency("1")
        .build()
        .await?;
    let orchestrator = AgencyService::new(test.persistence().await, None).into_orchestrator(|| {});

    orchestrator.load().await;

    let result = orchestrator.outcome().unwrap().unwrap();
    assert!(result.is_offline);
    assert_eq!(names(&result.data.unwrap()), vec!["Agency 1"]);

    Ok(())
}

/// Expect the service built from the app context to use the current region's store
#[tokio::test]
async fn for_app_uses_current_region_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_agencies_endpoint(&["1"], 2)
        .build()
        .await?;
    let app = test.app_context();
    let updates = Arc::new(AtomicUsize::new(0));

    let first = {
        let updates = updates.clone();
        AgencyService::for_app(&app)
            .await
            .unwrap()
            .into_orchestrator(move || {
                updates.fetch_add(1, Ordering::SeqCst);
            })
    };
    let handle = first.start_load();
    assert_eq!(handle.await.unwrap(), CycleOutcome::Published);

    let second = AgencyService::for_app(&app)
        .await
        .unwrap()
        .into_orchestrator(|| {});
    second.load().await;

    assert_eq!(updates.load(Ordering::SeqCst), 1);
    assert_eq!(app.registry.len().await, 1);
    assert_eq!(
        names(&second.current_data().unwrap()),
        vec!["Agency 1"]
    );
    test.assert_mocks();

    Ok(())
}
