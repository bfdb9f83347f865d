use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        movie::{CreateMovieDto, MovieDto, ShowtimeCountDto, UpdateMovieDto},
        showtime::ShowTimeDto,
    },
    server::{
        error::AppError, model::movie::SearchMoviesParam, service::movie::MovieService,
        state::AppState,
    },
};

/// Tag for grouping movie endpoints in OpenAPI documentation
pub static MOVIE_TAG: &str = "movies";

#[derive(Deserialize)]
pub struct MovieSearchParams {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// Get the public movie catalog.
///
/// Returns every active movie ordered by title. Movies without a poster are
/// served with a stable fallback poster URL.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of active movies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/movies",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "List of active movies", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_movies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movies = service.get_active().await?;
    let dtos: Vec<MovieDto> = movies.into_iter().map(|movie| movie.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Search the public movie catalog.
///
/// Filters active movies by optional title, genre, and release year. Text
/// filters match case-insensitively as substrings; all provided filters must
/// match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Search filters from the query string
///
/// # Returns
/// - `200 OK` - Matching active movies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/movies/search",
    tag = MOVIE_TAG,
    params(
        ("title" = Option<String>, Query, description = "Title substring to match"),
        ("genre" = Option<String>, Query, description = "Genre substring to match"),
        ("year" = Option<i32>, Query, description = "Exact release year to match")
    ),
    responses(
        (status = 200, description = "Matching active movies", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movies = service
        .search(SearchMoviesParam {
            title: params.title,
            genre: params.genre,
            year: params.year,
        })
        .await?;
    let dtos: Vec<MovieDto> = movies.into_iter().map(|movie| movie.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single movie from the public catalog.
///
/// Archived movies are reported as missing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie to fetch
///
/// # Returns
/// - `200 OK` - The active movie
/// - `404 Not Found` - Movie missing or archived
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/movies/{movie_id}",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "The active movie", body = MovieDto),
        (status = 404, description = "Movie missing or archived", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movie = service.get_active_by_id(movie_id).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Get the showtimes for a movie in the public catalog.
///
/// The movie must exist and be active; its showtimes are returned soonest
/// first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie whose showtimes to fetch
///
/// # Returns
/// - `200 OK` - Showtimes for the movie
/// - `404 Not Found` - Movie missing or archived
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/movies/{movie_id}/showtimes",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Showtimes for the movie", body = Vec<ShowTimeDto>),
        (status = 404, description = "Movie missing or archived", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie_showtimes(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let showtimes = service.get_showtimes(movie_id).await?;
    let dtos: Vec<ShowTimeDto> = showtimes
        .into_iter()
        .map(|showtime| showtime.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the distinct genres across the public catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Sorted distinct genres of active movies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/genres",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "Sorted distinct genres", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let genres = service.get_genres().await?;

    Ok((StatusCode::OK, Json(genres)))
}

/// Get the distinct release years across the public catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Distinct release years of active movies, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/years",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "Distinct release years, newest first", body = Vec<i32>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_release_years(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let years = service.get_release_years().await?;

    Ok((StatusCode::OK, Json(years)))
}

/// Get the featured movies for the storefront.
///
/// Returns the first six active movies.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Featured movies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/public/featured",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "Featured movies", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_movies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movies = service.get_featured().await?;
    let dtos: Vec<MovieDto> = movies.into_iter().map(|movie| movie.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get every movie for the admin surface.
///
/// Archived movies are included.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All movies
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/movies",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "All movies including archived ones", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_movies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movies = service.get_all().await?;
    let dtos: Vec<MovieDto> = movies.into_iter().map(|movie| movie.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a movie.
///
/// Title, genre, and a positive duration are required; other fields fall back
/// to catalog defaults.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Movie creation data
///
/// # Returns
/// - `201 Created` - Successfully created movie
/// - `400 Bad Request` - A required field is missing or invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/movies",
    tag = MOVIE_TAG,
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Successfully created movie", body = MovieDto),
        (status = 400, description = "A required field is missing or invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movie = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(movie.into_dto())))
}

/// Update a movie.
///
/// Only provided fields are touched; provided fields are held to the same
/// rules as creation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie to update
/// - `payload` - Movie update data
///
/// # Returns
/// - `200 OK` - Successfully updated movie
/// - `400 Bad Request` - A provided field is invalid
/// - `404 Not Found` - No movie with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/movies/{movie_id}",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Successfully updated movie", body = MovieDto),
        (status = 400, description = "A provided field is invalid", body = ErrorDto),
        (status = 404, description = "No movie with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
    Json(payload): Json<UpdateMovieDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movie = service.update(movie_id, payload).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Delete a movie.
///
/// The movie's showtimes are removed along with it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie to delete
///
/// # Returns
/// - `204 No Content` - Movie and its showtimes deleted
/// - `404 Not Found` - No movie with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/movies/{movie_id}",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie and its showtimes deleted"),
        (status = 404, description = "No movie with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    service.delete(movie_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Archive a movie.
///
/// The movie disappears from the public catalog but keeps its record and
/// showtimes.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie to archive
///
/// # Returns
/// - `200 OK` - The archived movie
/// - `404 Not Found` - No movie with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/movies/{movie_id}/archive",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "The archived movie", body = MovieDto),
        (status = 404, description = "No movie with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let movie = service.archive(movie_id).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Count the showtimes scheduled for a movie.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie to count showtimes for
///
/// # Returns
/// - `200 OK` - Showtime count for the movie
/// - `404 Not Found` - No movie with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/movies/{movie_id}/showtime-count",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Showtime count for the movie", body = ShowtimeCountDto),
        (status = 404, description = "No movie with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie_showtime_count(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.db);

    let count = service.showtime_count(movie_id).await?;

    Ok((StatusCode::OK, Json(ShowtimeCountDto { movie_id, count })))
}
