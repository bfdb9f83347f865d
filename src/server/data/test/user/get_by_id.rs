use super::*;

/// Tests fetching a single user by id.
///
/// Expected: Ok(Some(User)) with joined status data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, created) = factory::helpers::create_user_with_status(db, "Active", "user").await?;

    let repo = UserRepository::new(db);
    let user = repo.get_by_id(created.user_id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.email, created.email);
    assert_eq!(user.status_name, status.status_name);

    Ok(())
}

/// Tests fetching a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.get_by_id(4242).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests reading a user whose stored registration date is unparseable text.
///
/// Expected: Err(AppError::Timestamp)
#[tokio::test]
async fn surfaces_malformed_registration_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    let created = factory::user::UserFactory::new(db, status.status_id)
        .registration_date("sometime last spring")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.get_by_id(created.user_id).await;

    assert!(matches!(result, Err(AppError::Timestamp(_))));

    Ok(())
}
