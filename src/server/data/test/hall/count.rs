use super::*;

/// Tests counting halls.
///
/// Expected: Ok(0) on an empty table, Ok(2) after two inserts
#[tokio::test]
async fn counts_halls() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CinemaHallRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::cinema_hall::create_hall(db).await?;
    factory::cinema_hall::create_hall(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
