use super::*;

/// Tests listing every movie including archived ones.
///
/// Verifies that the repository returns archived movies alongside active ones,
/// ordered alphabetically by title.
///
/// Expected: Ok(Vec<Movie>) containing both movies in title order
#[tokio::test]
async fn returns_all_movies_ordered_by_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::movie::MovieFactory::new(db)
        .title("Zodiac")
        .is_active(false)
        .build()
        .await?;
    factory::movie::MovieFactory::new(db)
        .title("Alien")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let movies = repo.get_all().await?;

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Alien");
    assert_eq!(movies[1].title, "Zodiac");
    assert!(!movies[1].is_active);

    Ok(())
}
