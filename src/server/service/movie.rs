//! Movie service for catalog and management business logic.
//!
//! This module provides the `MovieService` for both the public catalog surface
//! (active listings, search, genre/year filters, featured picks) and the admin
//! management surface (create, update, archive, delete). Validation and
//! defaulting of movie fields happen here so the repository only ever stores
//! resolved values.

use sea_orm::DatabaseConnection;

use crate::model::movie::{CreateMovieDto, UpdateMovieDto};
use crate::server::{
    data::{movie::MovieRepository, showtime::ShowTimeRepository},
    error::AppError,
    model::{
        movie::{CreateMovieParam, Movie, SearchMoviesParam, UpdateMovieParam},
        showtime::ShowTime,
    },
};

/// Poster images assigned to movies that have none of their own.
///
/// The pool is fixed, so assignment by `movie_id` modulo keeps every movie's
/// fallback poster stable across requests.
const POSTER_POOL: [&str; 11] = [
    "movie_12bcc189-4bcf-4780-aaa4-1c5360b1e8f1.png",
    "movie_1ea930ff-f2e9-42d6-b560-5eba79dc4112.png",
    "movie_244ff64f-00d4-4c7d-91f8-6a186603ff41.png",
    "movie_9c136ae0-1345-4de0-8205-3c9d7a74ccae.png",
    "movie_9c3b2a8e-de38-4374-8608-41ccdacef4ac.png",
    "movie_a3c0501b-7516-4be0-8804-0b9ff66cbbf9.png",
    "movie_ad41b530-1a80-4db6-91af-c318e8a3b2d3.png",
    "movie_b1b55829-8f62-4e42-8e97-5e7b4209835c.png",
    "movie_b92cb7c6-bd0c-4e39-8a48-7d805c0944ac.png",
    "movie_bc4bbf60-c9d4-46c5-a95b-7ce8c44ed68c.png",
    "movie_e2f1ce42-0f35-4e2f-bb6c-fcf57f8c02cd.png",
];

const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_DIRECTOR: &str = "Unknown";
const DEFAULT_DESCRIPTION: &str = "No description available";
const DEFAULT_RELEASE_YEAR: i32 = 2025;

/// Number of movies returned by the featured listing.
const FEATURED_COUNT: usize = 6;

/// Service providing business logic for the movie catalog.
///
/// This struct holds a reference to the database connection and provides
/// methods for the public catalog queries and the admin management
/// operations, including the deletion of a movie's showtimes ahead of the
/// movie itself.
pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    /// Creates a new MovieService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MovieService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the public catalog of active movies.
    ///
    /// Movies without a poster are assigned a stable fallback URL so the
    /// storefront always has an image to show.
    ///
    /// # Returns
    /// - `Ok(Vec<Movie>)` - Active movies ordered by title
    /// - `Err(AppError)` - Database error during query
    pub async fn get_active(&self) -> Result<Vec<Movie>, AppError> {
        let repo = MovieRepository::new(self.db);
        let mut movies = repo.get_active().await?;

        for movie in &mut movies {
            if movie.poster_url.as_deref().is_none_or(str::is_empty) {
                movie.poster_url = Some(Self::fallback_poster_url(movie.movie_id));
            }
        }

        Ok(movies)
    }

    /// Retrieves a single active movie.
    ///
    /// Archived movies are invisible to the public catalog, so they are
    /// reported as missing rather than returned.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie to look up
    ///
    /// # Returns
    /// - `Ok(Movie)` - The active movie
    /// - `Err(AppError::NotFound)` - Movie missing or archived
    pub async fn get_active_by_id(&self, movie_id: i32) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db);

        match repo.get_by_id(movie_id).await? {
            Some(movie) if movie.is_active => Ok(movie),
            _ => Err(AppError::NotFound(format!(
                "Movie with id {} not found",
                movie_id
            ))),
        }
    }

    /// Searches active movies by optional title, genre, and release year.
    ///
    /// Text filters match case-insensitively as substrings; all provided
    /// filters must match.
    ///
    /// # Arguments
    /// - `param` - The search filters
    ///
    /// # Returns
    /// - `Ok(Vec<Movie>)` - Matching active movies
    /// - `Err(AppError)` - Database error during query
    pub async fn search(&self, param: SearchMoviesParam) -> Result<Vec<Movie>, AppError> {
        let repo = MovieRepository::new(self.db);
        let movies = repo.get_active().await?;

        let title_filter = param.title.map(|t| t.to_lowercase());
        let genre_filter = param.genre.map(|g| g.to_lowercase());

        Ok(movies
            .into_iter()
            .filter(|movie| {
                title_filter
                    .as_deref()
                    .is_none_or(|t| movie.title.to_lowercase().contains(t))
            })
            .filter(|movie| {
                genre_filter.as_deref().is_none_or(|g| {
                    movie
                        .genre
                        .as_deref()
                        .is_some_and(|genre| genre.to_lowercase().contains(g))
                })
            })
            .filter(|movie| param.year.is_none_or(|y| movie.release_year == Some(y)))
            .collect())
    }

    /// Returns the distinct genres across active movies, sorted.
    pub async fn get_genres(&self) -> Result<Vec<String>, AppError> {
        let repo = MovieRepository::new(self.db);
        let movies = repo.get_active().await?;

        let genres: std::collections::BTreeSet<String> = movies
            .into_iter()
            .filter_map(|movie| movie.genre)
            .filter(|genre| !genre.trim().is_empty())
            .collect();

        Ok(genres.into_iter().collect())
    }

    /// Returns the distinct release years across active movies, newest first.
    pub async fn get_release_years(&self) -> Result<Vec<i32>, AppError> {
        let repo = MovieRepository::new(self.db);
        let movies = repo.get_active().await?;

        let years: std::collections::BTreeSet<i32> = movies
            .into_iter()
            .filter_map(|movie| movie.release_year)
            .collect();

        Ok(years.into_iter().rev().collect())
    }

    /// Returns the first six active movies as the featured selection.
    pub async fn get_featured(&self) -> Result<Vec<Movie>, AppError> {
        let repo = MovieRepository::new(self.db);
        let mut movies = repo.get_active().await?;
        movies.truncate(FEATURED_COUNT);
        Ok(movies)
    }

    /// Retrieves the showtimes for an active movie, soonest first.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie whose showtimes to list
    ///
    /// # Returns
    /// - `Ok(Vec<ShowTime>)` - The movie's showtimes ordered by start time
    /// - `Err(AppError::NotFound)` - Movie missing or archived
    pub async fn get_showtimes(&self, movie_id: i32) -> Result<Vec<ShowTime>, AppError> {
        self.get_active_by_id(movie_id).await?;

        let showtime_repo = ShowTimeRepository::new(self.db);
        let mut showtimes = showtime_repo.get_by_movie(movie_id).await?;
        showtimes.sort_by_key(|showtime| showtime.start_time);

        Ok(showtimes)
    }

    /// Retrieves every movie, including archived ones, for the admin surface.
    pub async fn get_all(&self) -> Result<Vec<Movie>, AppError> {
        let repo = MovieRepository::new(self.db);
        repo.get_all().await
    }

    /// Creates a movie from an admin request.
    ///
    /// Title, genre, and a positive duration are required. Language, director,
    /// description, and release year fall back to catalog defaults when absent
    /// or blank.
    ///
    /// # Arguments
    /// - `dto` - The creation request body
    ///
    /// # Returns
    /// - `Ok(Movie)` - The created movie
    /// - `Err(AppError::BadRequest)` - A required field is missing or invalid
    pub async fn create(&self, dto: CreateMovieDto) -> Result<Movie, AppError> {
        let param = Self::resolve_create(dto)?;

        let repo = MovieRepository::new(self.db);
        repo.create(param).await
    }

    /// Updates a movie from an admin request, touching only provided fields.
    ///
    /// Provided fields are held to the same rules as creation: the title and
    /// genre may not be blanked out, and the duration must stay positive.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie to update
    /// - `dto` - The update request body
    ///
    /// # Returns
    /// - `Ok(Movie)` - The updated movie
    /// - `Err(AppError::NotFound)` - No movie with that ID
    /// - `Err(AppError::BadRequest)` - A provided field is invalid
    pub async fn update(&self, movie_id: i32, dto: UpdateMovieDto) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db);

        if repo.get_by_id(movie_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Movie with id {} not found",
                movie_id
            )));
        }

        if dto.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::BadRequest("Movie title is required".to_string()));
        }
        if dto.genre.as_deref().is_some_and(|g| g.trim().is_empty()) {
            return Err(AppError::BadRequest("Movie genre is required".to_string()));
        }
        if dto.duration.is_some_and(|d| d <= 0) {
            return Err(AppError::BadRequest(
                "Movie duration must be greater than 0".to_string(),
            ));
        }

        repo.update(UpdateMovieParam {
            movie_id,
            title: dto.title,
            description: dto.description,
            release_year: dto.release_year,
            genre: dto.genre,
            duration: dto.duration,
            language: dto.language,
            director: dto.director,
            poster_url: dto.poster_url,
            is_active: dto.is_active,
        })
        .await
    }

    /// Deletes a movie along with its showtimes.
    ///
    /// Showtimes reference the movie, so they go first.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie to delete
    ///
    /// # Returns
    /// - `Ok(())` - Movie and its showtimes deleted
    /// - `Err(AppError::NotFound)` - No movie with that ID
    pub async fn delete(&self, movie_id: i32) -> Result<(), AppError> {
        let repo = MovieRepository::new(self.db);

        let movie = repo.get_by_id(movie_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Movie with id {} not found", movie_id))
        })?;

        let showtime_repo = ShowTimeRepository::new(self.db);
        let deleted = showtime_repo.delete_by_movie(movie_id).await?;
        repo.delete(movie_id).await?;

        tracing::info!(
            "Deleted movie '{}' along with {} showtimes",
            movie.title,
            deleted
        );

        Ok(())
    }

    /// Archives a movie so it disappears from the public catalog.
    ///
    /// The record and its showtimes are kept; only the active flag changes.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie to archive
    ///
    /// # Returns
    /// - `Ok(Movie)` - The archived movie
    /// - `Err(AppError::NotFound)` - No movie with that ID
    pub async fn archive(&self, movie_id: i32) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db);

        if repo.get_by_id(movie_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Movie with id {} not found",
                movie_id
            )));
        }

        repo.set_active(movie_id, false).await?;

        repo.get_by_id(movie_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Movie with id {} not found", movie_id))
        })
    }

    /// Counts the showtimes scheduled for a movie.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie to count showtimes for
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of showtimes
    /// - `Err(AppError::NotFound)` - No movie with that ID
    pub async fn showtime_count(&self, movie_id: i32) -> Result<u64, AppError> {
        let repo = MovieRepository::new(self.db);

        if repo.get_by_id(movie_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Movie with id {} not found",
                movie_id
            )));
        }

        let showtime_repo = ShowTimeRepository::new(self.db);
        showtime_repo.count_by_movie(movie_id).await
    }

    /// Validates a creation request and fills in catalog defaults.
    fn resolve_create(dto: CreateMovieDto) -> Result<CreateMovieParam, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("Movie title is required".to_string()));
        }
        let genre = match dto.genre {
            Some(genre) if !genre.trim().is_empty() => genre,
            _ => return Err(AppError::BadRequest("Movie genre is required".to_string())),
        };
        let duration = match dto.duration {
            Some(duration) if duration > 0 => duration,
            _ => {
                return Err(AppError::BadRequest(
                    "Movie duration must be greater than 0".to_string(),
                ))
            }
        };

        Ok(CreateMovieParam {
            title: dto.title,
            description: Self::or_default(dto.description, DEFAULT_DESCRIPTION),
            release_year: dto.release_year.unwrap_or(DEFAULT_RELEASE_YEAR),
            genre,
            duration,
            language: Self::or_default(dto.language, DEFAULT_LANGUAGE),
            director: Self::or_default(dto.director, DEFAULT_DIRECTOR),
            poster_url: dto.poster_url,
        })
    }

    /// Returns the value unless it is absent or blank, in which case the
    /// default takes its place.
    fn or_default(value: Option<String>, default: &str) -> String {
        match value {
            Some(value) if !value.trim().is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Picks a stable poster from the pool for a movie without one.
    fn fallback_poster_url(movie_id: i32) -> String {
        let index = movie_id.rem_euclid(POSTER_POOL.len() as i32) as usize;
        format!("static/images/{}", POSTER_POOL[index])
    }
}
