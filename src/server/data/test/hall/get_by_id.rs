use super::*;

/// Tests finding an existing hall by ID.
///
/// Expected: Ok(Some(CinemaHall)) with matching data
#[tokio::test]
async fn finds_existing_hall() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::cinema_hall::create_hall_with_capacity(db, 30).await?;

    let repo = CinemaHallRepository::new(db);
    let hall = repo.get_by_id(created.hall_id).await?;

    assert!(hall.is_some());
    assert_eq!(hall.unwrap().capacity, 30);

    Ok(())
}

/// Tests querying for a hall that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_hall() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CinemaHallRepository::new(db);
    let hall = repo.get_by_id(9999).await?;

    assert!(hall.is_none());

    Ok(())
}
