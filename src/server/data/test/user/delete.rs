use super::*;

/// Tests deleting a user account.
///
/// Expected: Ok(()) and the user is no longer retrievable
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    let created = factory::user::create_user(db, status.status_id).await?;

    let repo = UserRepository::new(db);
    repo.delete(created.user_id).await?;

    let user = repo.get_by_id(created.user_id).await?;
    assert!(user.is_none());

    Ok(())
}

/// Tests that deleting a user leaves its status row in place.
///
/// Expected: Ok(()) and the status can still be found by name
#[tokio::test]
async fn keeps_status_row() -> Result<(), AppError> {
    use crate::server::data::user_status::UserStatusRepository;

    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status_named(db, "Active", "user").await?;
    let created = factory::user::create_user(db, status.status_id).await?;

    let repo = UserRepository::new(db);
    repo.delete(created.user_id).await?;

    let status_repo = UserStatusRepository::new(db);
    let found = status_repo.find_by_name("Active").await?;
    assert!(found.is_some());

    Ok(())
}
