use super::*;

/// Tests partial updates leaving other fields untouched.
///
/// Verifies that updating the price does not disturb the stored start time,
/// including rows still holding a legacy layout.
///
/// Expected: Ok(ShowTime) with new price and original start time
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;
    let created = factory::showtime::ShowTimeFactory::new(db, movie.movie_id, hall.hall_id)
        .start_time("2025-09-18 18:00")
        .price(12.5)
        .build()
        .await?;

    let repo = ShowTimeRepository::new(db);
    let updated = repo
        .update(UpdateShowTimeParam {
            showtime_id: created.showtime_id,
            movie_id: None,
            hall_id: None,
            start_time: None,
            end_time: None,
            price: Some(17.0),
        })
        .await?;

    assert_eq!(updated.price, 17.0);
    assert_eq!(updated.start_time, dt(2025, 9, 18, 18, 0, 0));

    Ok(())
}

/// Tests that an updated start time is rewritten canonically.
///
/// Once a row's start time is updated it holds the canonical layout, even if
/// the row previously stored a legacy one.
///
/// Expected: raw column text equals "2025-09-19T20:30:00" after update
#[tokio::test]
async fn rewrites_updated_start_time_canonically() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;
    let created = factory::showtime::ShowTimeFactory::new(db, movie.movie_id, hall.hall_id)
        .start_time("2025-09-18 18:00")
        .build()
        .await?;

    let repo = ShowTimeRepository::new(db);
    repo.update(UpdateShowTimeParam {
        showtime_id: created.showtime_id,
        movie_id: None,
        hall_id: None,
        start_time: Some(dt(2025, 9, 19, 20, 30, 0)),
        end_time: None,
        price: None,
    })
    .await?;

    let raw = entity::prelude::Showtime::find_by_id(created.showtime_id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(raw.start_time, "2025-09-19T20:30:00");

    Ok(())
}

/// Tests updating a showtime that does not exist.
///
/// Expected: Err for the missing record
#[tokio::test]
async fn fails_for_nonexistent_showtime() {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShowTimeRepository::new(db);
    let result = repo
        .update(UpdateShowTimeParam {
            showtime_id: 9999,
            movie_id: None,
            hall_id: None,
            start_time: None,
            end_time: None,
            price: Some(10.0),
        })
        .await;

    assert!(result.is_err());
}
