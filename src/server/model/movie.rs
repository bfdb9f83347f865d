//! Movie domain models and parameters.
//!
//! Provides the movie catalog domain model plus parameter types for the
//! management operations. Movies carry no timestamp columns, so conversion
//! from the entity model is infallible.

use crate::model::movie::MovieDto;

/// Movie in the catalog, active or archived.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Unique identifier for the movie.
    pub movie_id: i32,
    /// Display title.
    pub title: String,
    /// Optional synopsis text.
    pub description: Option<String>,
    /// Year of theatrical release.
    pub release_year: Option<i32>,
    /// Genre label used for catalog filtering.
    pub genre: Option<String>,
    /// Runtime in minutes.
    pub duration: Option<i32>,
    /// Spoken language.
    pub language: Option<String>,
    /// Director credit.
    pub director: Option<String>,
    /// Poster image URL, if one has been assigned.
    pub poster_url: Option<String>,
    /// Whether the movie is visible in the public catalog.
    pub is_active: bool,
}

impl Movie {
    /// Converts an entity model to a movie domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Movie` - The converted movie domain model
    pub fn from_entity(entity: entity::movie::Model) -> Self {
        Self {
            movie_id: entity.movie_id,
            title: entity.title,
            description: entity.description,
            release_year: entity.release_year,
            genre: entity.genre,
            duration: entity.duration,
            language: entity.language,
            director: entity.director,
            poster_url: entity.poster_url,
            is_active: entity.is_active,
        }
    }

    /// Converts the movie domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MovieDto` - The converted movie DTO
    pub fn into_dto(self) -> MovieDto {
        MovieDto {
            movie_id: self.movie_id,
            title: self.title,
            description: self.description,
            release_year: self.release_year,
            genre: self.genre,
            duration: self.duration,
            language: self.language,
            director: self.director,
            poster_url: self.poster_url,
            is_active: self.is_active,
        }
    }
}

/// Parameters for adding a movie to the catalog.
///
/// Carries the fields exactly as validated and defaulted by the service
/// layer; new movies always start active.
#[derive(Debug, Clone)]
pub struct CreateMovieParam {
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub genre: String,
    pub duration: i32,
    pub language: String,
    pub director: String,
    pub poster_url: Option<String>,
}

/// Parameters for updating an existing movie.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone)]
pub struct UpdateMovieParam {
    pub movie_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Parameters for searching the public catalog.
///
/// Text filters match case-insensitively as substrings; all filters are
/// combined with AND. Only active movies are searched.
#[derive(Debug, Clone, Default)]
pub struct SearchMoviesParam {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}
