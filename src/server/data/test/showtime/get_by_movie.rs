use super::*;

/// Tests filtering showtimes by movie.
///
/// Verifies that only showtimes referencing the requested movie are returned
/// even when other movies have showtimes in the same halls.
///
/// Expected: Ok(Vec<ShowTime>) containing only the requested movie's showtimes
#[tokio::test]
async fn returns_only_showtimes_for_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let other = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;

    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;
    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;
    factory::showtime::create_showtime(db, other.movie_id, hall.hall_id).await?;

    let repo = ShowTimeRepository::new(db);
    let showtimes = repo.get_by_movie(movie.movie_id).await?;

    assert_eq!(showtimes.len(), 2);
    assert!(showtimes.iter().all(|s| s.movie_id == movie.movie_id));

    Ok(())
}

/// Tests filtering by a movie without showtimes.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_movie_without_showtimes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;

    let repo = ShowTimeRepository::new(db);
    let showtimes = repo.get_by_movie(movie.movie_id).await?;

    assert!(showtimes.is_empty());

    Ok(())
}
