use super::*;

/// Tests counting registered users.
///
/// Expected: Ok(0) on an empty table, Ok(2) after two registrations
#[tokio::test]
async fn counts_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    let status = factory::user_status::create_status(db).await?;
    factory::user::create_user(db, status.status_id).await?;
    factory::user::create_user(db, status.status_id).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
