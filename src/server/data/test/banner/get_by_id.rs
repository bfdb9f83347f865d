use super::*;

/// Tests finding an existing banner by ID.
///
/// Expected: Ok(Some(Banner)) with matching data
#[tokio::test]
async fn finds_existing_banner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::banner::BannerFactory::new(db)
        .title("Autumn special")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let banner = repo.get_by_id(created.banner_id).await?;

    assert!(banner.is_some());
    assert_eq!(banner.unwrap().title, "Autumn special");

    Ok(())
}

/// Tests querying for a banner that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_banner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromotionalBanner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannerRepository::new(db);
    let banner = repo.get_by_id(9999).await?;

    assert!(banner.is_none());

    Ok(())
}
