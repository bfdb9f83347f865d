use super::*;

/// Tests bulk deletion of a movie's showtimes.
///
/// Verifies that every showtime for the movie is removed and the affected
/// count reported, while other movies' showtimes survive.
///
/// Expected: Ok(2) with the other movie's showtime still present
#[tokio::test]
async fn deletes_all_showtimes_for_movie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;
    let other = factory::movie::create_movie(db).await?;
    let hall = factory::cinema_hall::create_hall(db).await?;

    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;
    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;
    let kept = factory::showtime::create_showtime(db, other.movie_id, hall.hall_id).await?;

    let repo = ShowTimeRepository::new(db);
    let deleted = repo.delete_by_movie(movie.movie_id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_by_movie(movie.movie_id).await?.is_empty());
    assert!(repo.get_by_id(kept.showtime_id).await?.is_some());

    Ok(())
}

/// Tests bulk deletion when the movie has no showtimes.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_for_movie_without_showtimes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;

    let repo = ShowTimeRepository::new(db);
    let deleted = repo.delete_by_movie(movie.movie_id).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
