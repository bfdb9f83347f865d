use super::*;
use sea_orm::EntityTrait;

/// Tests that created showtimes store the canonical text layout.
///
/// New rows are written through the renderer, so the raw column must hold the
/// T-separated, whole-second layout rather than whatever the caller computed
/// the value from.
///
/// Expected: stored start_time text equals "2025-09-18T18:00:00"
#[tokio::test]
async fn stores_canonical_text_layout() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;

    let repo = ShowTimeRepository::new(db);
    let created = repo
        .create(CreateShowTimeParam {
            movie_id: movie.movie_id,
            hall_id: hall.hall_id,
            start_time: dt(2025, 9, 18, 18, 0, 0),
            end_time: None,
            price: 12.5,
        })
        .await?;

    let raw = entity::prelude::Showtime::find_by_id(created.showtime_id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(raw.start_time, "2025-09-18T18:00:00");
    assert!(raw.end_time.is_none());

    Ok(())
}

/// Tests the write-then-read round trip.
///
/// Verifies that a showtime created from normalized values reads back equal,
/// including the optional end time.
///
/// Expected: Ok(ShowTime) matching the creation parameters
#[tokio::test]
async fn round_trips_times_through_storage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;

    let repo = ShowTimeRepository::new(db);
    let created = repo
        .create(CreateShowTimeParam {
            movie_id: movie.movie_id,
            hall_id: hall.hall_id,
            start_time: dt(2025, 9, 18, 18, 0, 0),
            end_time: Some(dt(2025, 9, 18, 20, 15, 0)),
            price: 12.5,
        })
        .await?;

    let fetched = repo.get_by_id(created.showtime_id).await?.unwrap();

    assert_eq!(fetched.start_time, dt(2025, 9, 18, 18, 0, 0));
    assert_eq!(fetched.end_time, Some(dt(2025, 9, 18, 20, 15, 0)));
    assert_eq!(fetched.hall_id, hall.hall_id);

    Ok(())
}
