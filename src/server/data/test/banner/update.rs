use super::*;

/// Tests partial updates leaving other fields untouched.
///
/// Expected: Ok(Banner) with new title and original window
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::banner::BannerFactory::new(db)
        .title("Old title")
        .start_date("2025-09-01T00:00:00")
        .end_date("2025-09-30T23:59:59")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let updated = repo
        .update(UpdateBannerParam {
            banner_id: created.banner_id,
            title: Some("New title".to_string()),
            description: None,
            image_url: None,
            target_url: None,
            discount_code: None,
            discount_percentage: None,
            start_date: None,
            end_date: None,
            is_active: None,
            display_order: None,
        })
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.start_date, dt(2025, 9, 1, 0, 0, 0));
    assert_eq!(updated.end_date, dt(2025, 9, 30, 23, 59, 59));

    Ok(())
}

/// Tests disabling a banner through update.
///
/// Expected: Ok(Banner) no longer active
#[tokio::test]
async fn disables_banner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::banner::create_banner(db).await?;

    let repo = BannerRepository::new(db);
    let updated = repo
        .update(UpdateBannerParam {
            banner_id: created.banner_id,
            title: None,
            description: None,
            image_url: None,
            target_url: None,
            discount_code: None,
            discount_percentage: None,
            start_date: None,
            end_date: None,
            is_active: Some(false),
            display_order: None,
        })
        .await?;

    assert!(!updated.is_active);

    Ok(())
}
