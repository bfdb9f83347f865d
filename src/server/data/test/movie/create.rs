use super::*;

/// Tests creating a movie with full catalog fields.
///
/// Verifies that the repository inserts a movie from creation parameters and
/// returns the stored record with a generated ID and the active flag set.
///
/// Expected: Ok(Movie) with matching fields and is_active = true
#[tokio::test]
async fn creates_movie_with_catalog_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);

    let movie = repo
        .create(CreateMovieParam {
            title: "The Long Goodbye".to_string(),
            description: "A private eye unravels a favor gone wrong".to_string(),
            release_year: 1973,
            genre: "Noir".to_string(),
            duration: 112,
            language: "English".to_string(),
            director: "Robert Altman".to_string(),
            poster_url: None,
        })
        .await?;

    assert!(movie.movie_id > 0);
    assert_eq!(movie.title, "The Long Goodbye");
    assert_eq!(movie.genre.as_deref(), Some("Noir"));
    assert_eq!(movie.duration, Some(112));
    assert!(movie.is_active);

    Ok(())
}
