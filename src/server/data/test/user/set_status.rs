use super::*;

/// Tests moving a user to a different status.
///
/// Verifies that the returned user reflects the new status name and role
/// rather than the ones it was created with.
///
/// Expected: Ok(User) carrying the new status data
#[tokio::test]
async fn moves_user_to_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user_status::create_status_named(db, "Active", "user").await?;
    let suspended = factory::user_status::create_status_named(db, "Suspended", "user").await?;
    let created = factory::user::create_user(db, active.status_id).await?;

    let repo = UserRepository::new(db);
    let user = repo.set_status(created.user_id, suspended.status_id).await?;

    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.status_name, "Suspended");

    Ok(())
}

/// Tests that a status change updates the user's role through the join.
///
/// Expected: Ok(User) with role "admin" after moving to the Admin status
#[tokio::test]
async fn status_change_updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user_status::create_status_named(db, "Active", "user").await?;
    let admin = factory::user_status::create_status_named(db, "Admin", "admin").await?;
    let created = factory::user::create_user(db, active.status_id).await?;

    let repo = UserRepository::new(db);
    let user = repo.set_status(created.user_id, admin.status_id).await?;

    assert_eq!(user.role, "admin");

    Ok(())
}

/// Tests changing the status of a user that does not exist.
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

    let status = factory::user_status::create_status(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.set_status(4242, status.status_id).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
