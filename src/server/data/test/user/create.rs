use super::*;

/// Tests registering a new user.
///
/// Verifies that the repository stamps the registration date itself and that a
/// fresh account has never logged in.
///
/// Expected: Ok(User) with a registration date and no last login
#[tokio::test]
async fn creates_user_with_registration_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status_named(db, "Active", "user").await?;

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        user_name: Some("Priya Raman".to_string()),
        email: "priya@example.com".to_string(),
        phone: Some("555-0117".to_string()),
    };
    let user = repo.create(param, status.status_id).await?;

    assert_eq!(user.user_name, Some("Priya Raman".to_string()));
    assert_eq!(user.email, "priya@example.com");
    assert_eq!(user.phone, Some("555-0117".to_string()));
    assert_eq!(user.status_name, "Active");
    assert_eq!(user.role, "user");
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that the stamped registration date is stored in the canonical text
/// layout.
///
/// Expected: stored column text parses as `%Y-%m-%dT%H:%M:%S%.f`
#[tokio::test]
async fn stamps_canonical_registration_text() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = factory::user_status::create_status(db).await?;

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        user_name: None,
        email: "canon@example.com".to_string(),
        phone: None,
    };
    let user = repo.create(param, status.status_id).await?;

    let stored = entity::prelude::User::find_by_id(user.user_id)
        .one(db)
        .await?
        .unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(
        &stored.registration_date,
        "%Y-%m-%dT%H:%M:%S%.f"
    )
    .is_ok());

    Ok(())
}
