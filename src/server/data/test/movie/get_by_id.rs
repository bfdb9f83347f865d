use super::*;

/// Tests finding an existing movie by ID.
///
/// Expected: Ok(Some(Movie)) with matching data
#[tokio::test]
async fn finds_existing_movie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::MovieFactory::new(db)
        .title("Heat")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let movie = repo.get_by_id(created.movie_id).await?;

    assert!(movie.is_some());
    assert_eq!(movie.unwrap().title, "Heat");

    Ok(())
}

/// Tests querying for a movie that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_movie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let movie = repo.get_by_id(9999).await?;

    assert!(movie.is_none());

    Ok(())
}
