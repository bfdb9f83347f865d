use super::*;
use sea_orm::EntityTrait;

/// Tests creating a banner.
///
/// Verifies that new banners start with zero clicks and that the window
/// bounds are stored in the canonical text layout.
///
/// Expected: Ok(Banner) active, zero clicks, canonical stored text
#[tokio::test]
async fn creates_banner_with_canonical_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannerRepository::new(db);
    let banner = repo
        .create(CreateBannerParam {
            title: "Autumn special".to_string(),
            description: None,
            image_url: "https://cdn.example.com/autumn.png".to_string(),
            target_url: None,
            discount_code: Some("FALL25".to_string()),
            discount_percentage: Some(25.0),
            start_date: dt(2025, 9, 1, 0, 0, 0),
            end_date: dt(2025, 9, 30, 23, 59, 59),
            is_active: true,
            display_order: 1,
        })
        .await?;

    assert!(banner.is_active);
    assert_eq!(banner.click_count, 0);
    assert_eq!(banner.start_date, dt(2025, 9, 1, 0, 0, 0));

    let raw = entity::prelude::PromotionalBanner::find_by_id(banner.banner_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(raw.start_date, "2025-09-01T00:00:00");
    assert_eq!(raw.end_date, "2025-09-30T23:59:59");

    Ok(())
}
