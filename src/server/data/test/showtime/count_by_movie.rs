use super::*;

/// Tests counting showtimes per movie.
///
/// Expected: Ok(2) for the movie with two showtimes, Ok(0) for the other
#[tokio::test]
async fn counts_showtimes_for_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let other = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;

    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;
    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;

    let repo = ShowTimeRepository::new(db);

    assert_eq!(repo.count_by_movie(movie.movie_id).await?, 2);
    assert_eq!(repo.count_by_movie(other.movie_id).await?, 0);

    Ok(())
}
