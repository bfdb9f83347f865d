use super::*;

/// Tests partial updates leaving other fields untouched.
///
/// Verifies that only the provided fields change while everything else keeps
/// its stored value.
///
/// Expected: Ok(Movie) with new title and original genre
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::MovieFactory::new(db)
        .title("Working Title")
        .genre("Noir")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let updated = repo
        .update(UpdateMovieParam {
            movie_id: created.movie_id,
            title: Some("Final Title".to_string()),
            description: None,
            release_year: None,
            genre: None,
            duration: None,
            language: None,
            director: None,
            poster_url: None,
            is_active: None,
        })
        .await?;

    assert_eq!(updated.title, "Final Title");
    assert_eq!(updated.genre.as_deref(), Some("Noir"));
    assert!(updated.is_active);

    Ok(())
}

/// Tests updating a movie that does not exist.
///
/// Expected: Err for the missing record
#[tokio::test]
async fn fails_for_nonexistent_movie() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let result = repo
        .update(UpdateMovieParam {
            movie_id: 9999,
            title: Some("Ghost".to_string()),
            description: None,
            release_year: None,
            genre: None,
            duration: None,
            language: None,
            director: None,
            poster_url: None,
            is_active: None,
        })
        .await;

    assert!(result.is_err());
}
