use super::*;

/// Tests finding an existing seat by ID.
///
/// Expected: Ok(Some(Seat)) with parsed status
#[tokio::test]
async fn finds_existing_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::cinema_hall::create_hall(db).await?;
    let created = factory::seat::create_seat(db, hall.hall_id).await?;

    let repo = SeatRepository::new(db);
    let seat = repo.get_by_id(created.seat_id).await?;

    assert!(seat.is_some());
    assert_eq!(seat.unwrap().status, SeatStatus::Available);

    Ok(())
}

/// Tests querying for a seat that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeatRepository::new(db);
    let seat = repo.get_by_id(9999).await?;

    assert!(seat.is_none());

    Ok(())
}
