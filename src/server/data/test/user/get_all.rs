use super::*;

/// Tests listing users with their joined status data.
///
/// Verifies that every returned user carries the status name and role of the
/// status row it points at.
///
/// Expected: Ok(Vec<User>) with populated status_name and role
#[tokio::test]
async fn returns_users_with_status_data() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user_status::create_status_named(db, "Active", "user").await?;
    let admin = factory::user_status::create_status_named(db, "Admin", "admin").await?;
    factory::user::create_user(db, active.status_id).await?;
    factory::user::create_user(db, admin.status_id).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].status_name, "Active");
    assert_eq!(users[0].role, "user");
    assert_eq!(users[1].status_name, "Admin");
    assert_eq!(users[1].role, "admin");

    Ok(())
}

/// Tests reading users stored with legacy timestamp layouts.
///
/// Expected: Ok(Vec<User>) with normalized registration and login times
#[tokio::test]
async fn normalizes_legacy_timestamp_layouts() -> Result<(), AppError> {
    use chrono::NaiveDate;

    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;
    factory::user::UserFactory::new(db, status.status_id)
        .registration_date("2025-09-17 10:30")
        .last_login("2025-09-18 08:00:00.250")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 1);
    assert_eq!(
        users[0].registration_date,
        NaiveDate::from_ymd_opt(2025, 9, 17)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    );
    assert_eq!(
        users[0].last_login,
        NaiveDate::from_ymd_opt(2025, 9, 18)
            .unwrap()
            .and_hms_milli_opt(8, 0, 0, 250)
    );

    Ok(())
}
