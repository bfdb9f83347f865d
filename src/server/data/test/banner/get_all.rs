use super::*;

/// Tests listing banners in carousel order.
///
/// Verifies that banners come back sorted by display order regardless of
/// insertion order, with inactive ones included.
///
/// Expected: Ok(Vec<Banner>) ordered by display_order ascending
#[tokio::test]
async fn returns_banners_in_display_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::banner::BannerFactory::new(db)
        .display_order(2)
        .is_active(false)
        .build()
        .await?;
    let first = factory::banner::BannerFactory::new(db)
        .display_order(1)
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let banners = repo.get_all().await?;

    assert_eq!(banners.len(), 2);
    assert_eq!(banners[0].banner_id, first.banner_id);
    assert_eq!(banners[1].banner_id, second.banner_id);
    assert!(!banners[1].is_active);

    Ok(())
}

/// Tests reading banner windows stored in legacy timestamp layouts.
///
/// Expected: Ok(Vec<Banner>) with normalized window bounds
#[tokio::test]
async fn normalizes_legacy_window_layouts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::banner::BannerFactory::new(db)
        .start_date("2025-09-01 00:00")
        .end_date("2025-09-30 23:59:59.000")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let banners = repo.get_all().await?;

    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].start_date, dt(2025, 9, 1, 0, 0, 0));
    assert_eq!(banners[0].end_date, dt(2025, 9, 30, 23, 59, 59));

    Ok(())
}

/// Tests that a blank window bound surfaces as an error.
///
/// Both window columns are NOT NULL; a row holding empty text is unreadable
/// rather than open-ended.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn surfaces_blank_window_bound() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::banner::BannerFactory::new(db)
        .start_date("")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
