use super::*;

/// Tests looking up a status by its name.
///
/// Expected: Ok(Some(Model)) with the matching role
#[tokio::test]
async fn finds_status_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_status::create_status_named(db, "Active", "user").await?;
    factory::user_status::create_status_named(db, "Admin", "admin").await?;

    let repo = UserStatusRepository::new(db);
    let status = repo.find_by_name("Admin").await?;

    assert!(status.is_some());
    assert_eq!(status.unwrap().role, "admin");

    Ok(())
}

/// Tests looking up a status name that was never seeded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_status::create_status_named(db, "Active", "user").await?;

    let repo = UserStatusRepository::new(db);
    let status = repo.find_by_name("Banned").await?;

    assert!(status.is_none());

    Ok(())
}
