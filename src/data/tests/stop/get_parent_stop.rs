//! Tests for StopRepository::get_parent_stop method.

use super::*;

/// Expected: Ok(Some(parent))
#[tokio::test]
async fn returns_cached_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .with_mock_stop("1_75400", None)
        .with_mock_stop("1_75403", Some("1_75400"))
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    let parent = stop_repo.get_parent_stop("1_75403").await?;

    assert_eq!(parent.map(|stop| stop.id), Some("1_75400".to_string()));

    Ok(())
}

/// Tests a stop whose parent has not been cached yet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_uncached_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .with_mock_stop("1_75403", Some("1_75400"))
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);
    let parent = stop_repo.get_parent_stop("1_75403").await?;

    assert!(parent.is_none());

    Ok(())
}

/// Expected: Ok(None) for a stop without parent and for an unknown stop
#[tokio::test]
async fn returns_none_without_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Stop)
        .with_mock_stop("1_75403", None)
        .build()
        .await?;

    let stop_repo = StopRepository::new(&test.db);

    assert!(stop_repo.get_parent_stop("1_75403").await?.is_none());
    assert!(stop_repo.get_parent_stop("1_99999").await?.is_none());

    Ok(())
}
