use super::*;

/// Tests looking up a user by email address.
///
/// Expected: Ok(Some(User)) for a registered address
#[tokio::test]
async fn finds_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    let created = factory::user::UserFactory::new(db, status.status_id)
        .email("marta@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("marta@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().user_id, created.user_id);

    Ok(())
}

/// Tests looking up an email that no user has registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    factory::user::create_user(db, status.status_id).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
