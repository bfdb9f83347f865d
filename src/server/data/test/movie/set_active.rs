use super::*;

/// Tests archiving a movie through the active flag.
///
/// Expected: Ok with the movie no longer active
#[tokio::test]
async fn archives_movie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::create_movie(db).await?;

    let repo = MovieRepository::new(db);
    repo.set_active(created.movie_id, false).await?;

    let movie = repo.get_by_id(created.movie_id).await?.unwrap();
    assert!(!movie.is_active);

    Ok(())
}

/// Tests restoring an archived movie.
///
/// Expected: Ok with the movie active again
#[tokio::test]
async fn restores_archived_movie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::MovieFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    repo.set_active(created.movie_id, true).await?;

    let movie = repo.get_by_id(created.movie_id).await?.unwrap();
    assert!(movie.is_active);

    Ok(())
}
