use super::*;

/// Tests listing only the active catalog.
///
/// Verifies that archived movies are excluded from the active listing while
/// active ones are returned.
///
/// Expected: Ok(Vec<Movie>) containing only the active movie
#[tokio::test]
async fn excludes_archived_movies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::movie::MovieFactory::new(db)
        .title("Archived")
        .is_active(false)
        .build()
        .await?;
    let active = factory::movie::MovieFactory::new(db)
        .title("Active")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let movies = repo.get_active().await?;

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].movie_id, active.movie_id);

    Ok(())
}
