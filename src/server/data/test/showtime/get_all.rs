use super::*;

/// Tests listing showtimes with their joined display names.
///
/// Verifies that each returned showtime carries the movie title and hall name
/// of the rows it references.
///
/// Expected: Ok(Vec<ShowTime>) with populated movie_title and hall_name
#[tokio::test]
async fn returns_showtimes_with_movie_and_hall_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::MovieFactory::new(db)
        .title("Heat")
        .build()
        .await?;
    let hall = factory::cinema_hall::CinemaHallFactory::new(db)
        .name("IMAX")
        .build()
        .await?;
    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;

    let repo = ShowTimeRepository::new(db);
    let showtimes = repo.get_all().await?;

    assert_eq!(showtimes.len(), 1);
    assert_eq!(showtimes[0].movie_title, "Heat");
    assert_eq!(showtimes[0].hall_name, "IMAX");

    Ok(())
}

/// Tests reading rows stored in the legacy timestamp layouts.
///
/// Rows written by older tooling hold minute-precision, space-separated and
/// fractional layouts in the same column. All of them must come back as the
/// same normalized value.
///
/// Expected: Ok(Vec<ShowTime>) where every start_time normalized identically
#[tokio::test]
async fn normalizes_legacy_start_time_layouts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;
    for raw in [
        "2025-09-18 18:00",
        "2025-09-18 18:00:00",
        "2025-09-18T18:00:00",
        "2025-09-18 18:00:00.000",
    ] {
        factory::showtime::ShowTimeFactory::new(db, movie.movie_id, hall.hall_id)
            .start_time(raw)
            .build()
            .await?;
    }

    let repo = ShowTimeRepository::new(db);
    let showtimes = repo.get_all().await?;

    assert_eq!(showtimes.len(), 4);
    for showtime in showtimes {
        assert_eq!(showtime.start_time, dt(2025, 9, 18, 18, 0, 0));
    }

    Ok(())
}

/// Tests that unreadable stored text surfaces as an error.
///
/// A row whose start_time matches none of the accepted layouts cannot be
/// silently skipped; the read reports it instead.
///
/// Expected: Err(AppError::Timestamp)
#[tokio::test]
async fn surfaces_malformed_start_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;
    factory::showtime::ShowTimeFactory::new(db, movie.movie_id, hall.hall_id)
        .start_time("next friday at eight")
        .build()
        .await?;

    let repo = ShowTimeRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::Timestamp(_))));

    Ok(())
}
