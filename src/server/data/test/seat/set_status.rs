use super::*;

/// Tests reserving a seat.
///
/// Expected: Ok(Seat) with the status flipped to Reserved
#[tokio::test]
async fn reserves_available_seat() -> Result<(), AppError> {
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
    let updated = repo.set_status(created.seat_id, SeatStatus::Reserved).await?;

    assert_eq!(updated.status, SeatStatus::Reserved);

    let fetched = repo.get_by_id(created.seat_id).await?.unwrap();
    assert_eq!(fetched.status, SeatStatus::Reserved);

    Ok(())
}

/// Tests setting the status of a seat that does not exist.
///
/// Expected: Err for the missing record
#[tokio::test]
async fn fails_for_nonexistent_seat() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeatRepository::new(db);
    let result = repo.set_status(9999, SeatStatus::Reserved).await;

    assert!(result.is_err());
}
