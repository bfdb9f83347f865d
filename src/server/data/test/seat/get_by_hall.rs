use super::*;

/// Tests listing a hall's seats in layout order.
///
/// Verifies that seats come back sorted by row letter first and seat number
/// second, regardless of insertion order.
///
/// Expected: Ok(Vec<Seat>) ordered A1, A2, B1
#[tokio::test]
async fn returns_seats_in_row_and_number_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::cinema_hall::create_hall(db).await?;
    for (row, number) in [("B", 1), ("A", 2), ("A", 1)] {
        factory::seat::SeatFactory::new(db, hall.hall_id)
            .row(row)
            .number(number)
            .build()
            .await?;
    }

    let repo = SeatRepository::new(db);
    let seats = repo.get_by_hall(hall.hall_id).await?;

    let layout: Vec<(String, i32)> = seats.iter().map(|s| (s.row.clone(), s.number)).collect();
    assert_eq!(
        layout,
        vec![
            ("A".to_string(), 1),
            ("A".to_string(), 2),
            ("B".to_string(), 1)
        ]
    );

    Ok(())
}

/// Tests that corrupt status text in a stored row surfaces as an error.
///
/// Expected: Err for the unknown status value
#[tokio::test]
async fn surfaces_unknown_status_text() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .with_table(entity::prelude::Seat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hall = factory::cinema_hall::create_hall(db).await?;
    factory::seat::SeatFactory::new(db, hall.hall_id)
        .status("BROKEN")
        .build()
        .await?;

    let repo = SeatRepository::new(db);
    let result = repo.get_by_hall(hall.hall_id).await;

    assert!(result.is_err());

    Ok(())
}
