use super::*;

/// Tests updating a user profile with a partial parameter set.
///
/// Verifies that only the provided fields change and the rest of the profile
/// is left alone.
///
/// Expected: Ok(User) with the new name and the original email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    let created = factory::user::UserFactory::new(db, status.status_id)
        .email("keep-me@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let param = UpdateUserParam {
        user_id: created.user_id,
        user_name: Some("Renamed".to_string()),
        email: None,
        phone: None,
    };
    let user = repo.update(param).await?;

    assert_eq!(user.user_name, Some("Renamed".to_string()));
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(AppError::DbErr(DbErr::RecordNotFound))
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = UpdateUserParam {
        user_id: 4242,
        user_name: Some("Ghost".to_string()),
        email: None,
        phone: None,
    };
    let result = repo.update(param).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
