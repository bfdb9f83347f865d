use super::*;
use crate::server::data::seat::SeatRepository;

/// Tests deleting a hall with seats in it.
///
/// The seat foreign key cascades, so deleting a hall wipes its seat bank too.
///
/// Expected: Ok with both the hall and its seats gone
#[tokio::test]
async fn deletes_hall_and_cascades_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::cinema_hall::create_hall(db).await?;
    factory::seat::create_seat(db, hall.hall_id).await?;
    factory::seat::create_seat(db, hall.hall_id).await?;

    let repo = CinemaHallRepository::new(db);
    repo.delete(hall.hall_id).await?;

    assert!(repo.get_by_id(hall.hall_id).await?.is_none());

    let seats = SeatRepository::new(db).get_by_hall(hall.hall_id).await?;
    assert!(seats.is_empty());

    Ok(())
}
