use super::*;

/// Tests recording banner clicks.
///
/// Verifies that each call bumps the stored count by exactly one and returns
/// the fresh value.
///
/// Expected: Ok(Banner) with click_count 1, then 2
#[tokio::test]
async fn increments_count_per_click() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);

    let first = repo.increment_click_count(created.banner_id).await?;
    assert_eq!(first.click_count, 1);

    let second = repo.increment_click_count(created.banner_id).await?;
    assert_eq!(second.click_count, 2);

    Ok(())
}

/// Tests clicking a banner that does not exist.
///
/// Expected: Err for the missing record
#[tokio::test]
async fn fails_for_nonexistent_banner() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannerRepository::new(db);
    let result = repo.increment_click_count(9999).await;

    assert!(result.is_err());
}
