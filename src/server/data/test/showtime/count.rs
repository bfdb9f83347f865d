use super::*;

/// Tests counting showtimes across all movies and halls.
///
/// Expected: Ok(0) on an empty table, Ok(2) after two inserts
#[tokio::test]
async fn counts_showtimes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShowTimeRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    let (movie, hall, _) = factory::helpers::create_showtime_with_dependencies(db).await?;
    factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
