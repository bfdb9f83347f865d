use super::*;

/// Tests seeding a batch of statuses in one call.
///
/// Expected: Ok(()) with all rows present in insertion order
#[tokio::test]
async fn inserts_all_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserStatusRepository::new(db);
    repo.insert_many(&[("Active", "user"), ("Admin", "admin"), ("Suspended", "user")])
        .await?;

    assert_eq!(repo.count().await?, 3);

    let statuses = repo.get_all().await?;
    assert_eq!(statuses[0].status_name, "Active");
    assert_eq!(statuses[1].status_name, "Admin");
    assert_eq!(statuses[2].status_name, "Suspended");

    Ok(())
}

/// Tests seeding an empty batch.
///
/// Expected: Ok(()) with no rows inserted
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserStatusRepository::new(db);
    repo.insert_many(&[]).await?;

    assert_eq!(repo.count().await?, 0);

    Ok(())
}
