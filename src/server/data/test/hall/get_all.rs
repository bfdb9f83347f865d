use super::*;

/// Tests listing halls in name order.
///
/// Expected: Ok(Vec<CinemaHall>) sorted alphabetically
#[tokio::test]
async fn returns_halls_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CinemaHall)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::cinema_hall::CinemaHallFactory::new(db)
        .name("Screen B")
        .build()
        .await?;
    factory::cinema_hall::CinemaHallFactory::new(db)
        .name("Screen A")
        .build()
        .await?;

    let repo = CinemaHallRepository::new(db);
    let halls = repo.get_all().await?;

    assert_eq!(halls.len(), 2);
    assert_eq!(halls[0].name, "Screen A");
    assert_eq!(halls[1].name, "Screen B");

    Ok(())
}
