use super::*;

/// Tests listing only banners flagged active.
///
/// The display window is not consulted here, so an active banner whose window
/// already closed is still returned. Window filtering belongs to the caller.
///
/// Expected: Ok(Vec<Banner>) without the disabled banner
#[tokio::test]
async fn excludes_disabled_banners() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::banner::BannerFactory::new(db)
        .is_active(false)
        .build()
        .await?;
    let enabled = factory::banner::create_banner(db).await?;
    let expired = factory::banner::BannerFactory::new(db)
        .start_date("2024-01-01T00:00:00")
        .end_date("2024-01-31T23:59:59")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let banners = repo.get_active().await?;

    let ids: Vec<i32> = banners.iter().map(|b| b.banner_id).collect();
    assert_eq!(banners.len(), 2);
    assert!(ids.contains(&enabled.banner_id));
    assert!(ids.contains(&expired.banner_id));

    Ok(())
}
