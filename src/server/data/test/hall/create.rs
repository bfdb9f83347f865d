use super::*;

/// Tests creating a hall.
///
/// Expected: Ok(CinemaHall) with matching fields and a generated ID
#[tokio::test]
async fn creates_hall() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CinemaHallRepository::new(db);
    let hall = repo
        .create(CreateCinemaHallParam {
            name: "IMAX".to_string(),
            location: Some("Second floor".to_string()),
            capacity: 50,
        })
        .await?;

    assert!(hall.hall_id > 0);
    assert_eq!(hall.name, "IMAX");
    assert_eq!(hall.capacity, 50);

    Ok(())
}
