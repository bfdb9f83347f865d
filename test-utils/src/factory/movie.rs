//! Movie factory for creating test movie entities.
//!
//! This module provides factory methods for creating movie entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movies with customizable fields.
///
/// Provides a builder pattern for creating movie entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::movie::MovieFactory;
///
/// let movie = MovieFactory::new(&db)
///     .title("The Long Goodbye")
///     .genre("Noir")
///     .is_active(false)
///     .build()
///     .await?;
/// ```
pub struct MovieFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    release_year: Option<i32>,
    genre: Option<String>,
    duration: Option<i32>,
    language: Option<String>,
    director: Option<String>,
    poster_url: Option<String>,
    is_active: bool,
}

impl<'a> MovieFactory<'a> {
    /// Creates a new MovieFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Movie {id}"` where id is auto-incremented
    /// - genre: `"Action"`
    /// - duration: `120`
    /// - release_year: `2025`
    /// - is_active: `true`
    /// - everything else: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MovieFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Movie {}", id),
            description: None,
            release_year: Some(2025),
            genre: Some("Action".to_string()),
            duration: Some(120),
            language: None,
            director: None,
            poster_url: None,
            is_active: true,
        }
    }

    /// Sets the title for the movie.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the movie.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the release year for the movie.
    pub fn release_year(mut self, release_year: i32) -> Self {
        self.release_year = Some(release_year);
        self
    }

    /// Sets the genre for the movie.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Sets the duration in minutes for the movie.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the language for the movie.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the director for the movie.
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Sets the poster URL for the movie.
    pub fn poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    /// Sets the archive flag for the movie.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the movie entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::movie::Model)` - Created movie entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::movie::Model, DbErr> {
        entity::movie::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            release_year: ActiveValue::Set(self.release_year),
            genre: ActiveValue::Set(self.genre),
            duration: ActiveValue::Set(self.duration),
            language: ActiveValue::Set(self.language),
            director: ActiveValue::Set(self.director),
            poster_url: ActiveValue::Set(self.poster_url),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a movie with default values.
///
/// Shorthand for `MovieFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::movie::Model)` - Created movie entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let movie = create_movie(&db).await?;
/// ```
pub async fn create_movie(db: &DatabaseConnection) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).build().await
}
