use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        showtime::{CreateShowTimeDto, ShowTimeDto, UpdateShowTimeDto},
    },
    server::{error::AppError, service::showtime::ShowTimeService, state::AppState},
};

/// Tag for grouping showtime endpoints in OpenAPI documentation
pub static SHOWTIME_TAG: &str = "showtimes";

/// Get every showtime.
///
/// Showtimes are ordered by start time, soonest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All showtimes
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/showtimes",
    tag = SHOWTIME_TAG,
    responses(
        (status = 200, description = "All showtimes ordered by start time", body = Vec<ShowTimeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_showtimes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    let showtimes = service.get_all().await?;
    let dtos: Vec<ShowTimeDto> = showtimes
        .into_iter()
        .map(|showtime| showtime.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single showtime.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `showtime_id` - ID of the showtime to fetch
///
/// # Returns
/// - `200 OK` - The showtime
/// - `404 Not Found` - No showtime with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/showtimes/{showtime_id}",
    tag = SHOWTIME_TAG,
    params(
        ("showtime_id" = i32, Path, description = "Showtime ID")
    ),
    responses(
        (status = 200, description = "The showtime", body = ShowTimeDto),
        (status = 404, description = "No showtime with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_showtime(
    State(state): State<AppState>,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    let showtime = service.get_by_id(showtime_id).await?;

    Ok((StatusCode::OK, Json(showtime.into_dto())))
}

/// Get the showtimes for a movie.
///
/// Unlike the public catalog listing, the movie is not required to be
/// active.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `movie_id` - ID of the movie whose showtimes to fetch
///
/// # Returns
/// - `200 OK` - Showtimes for the movie
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/showtimes/movie/{movie_id}",
    tag = SHOWTIME_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Showtimes for the movie", body = Vec<ShowTimeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_showtimes_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    let showtimes = service.get_by_movie(movie_id).await?;
    let dtos: Vec<ShowTimeDto> = showtimes
        .into_iter()
        .map(|showtime| showtime.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Schedule a showtime.
///
/// The start time text must parse in one of the supported layouts, the price
/// must be positive, and the referenced movie and hall must exist. A missing
/// end time defaults to the start time plus the movie's runtime.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Showtime creation data with raw timestamp text
///
/// # Returns
/// - `201 Created` - Successfully scheduled showtime
/// - `400 Bad Request` - Malformed timestamp text or non-positive price
/// - `404 Not Found` - Referenced movie or hall missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/showtimes",
    tag = SHOWTIME_TAG,
    request_body = CreateShowTimeDto,
    responses(
        (status = 201, description = "Successfully scheduled showtime", body = ShowTimeDto),
        (status = 400, description = "Malformed timestamp text or non-positive price", body = ErrorDto),
        (status = 404, description = "Referenced movie or hall missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_showtime(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    let showtime = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(showtime.into_dto())))
}

/// Update a showtime.
///
/// Only provided fields are touched. Provided timestamps are parsed from raw
/// text, and a provided movie or hall must exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `showtime_id` - ID of the showtime to update
/// - `payload` - Showtime update data
///
/// # Returns
/// - `200 OK` - Successfully updated showtime
/// - `400 Bad Request` - Malformed timestamp text or non-positive price
/// - `404 Not Found` - Showtime, movie, or hall missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/showtimes/{showtime_id}",
    tag = SHOWTIME_TAG,
    params(
        ("showtime_id" = i32, Path, description = "Showtime ID")
    ),
    request_body = UpdateShowTimeDto,
    responses(
        (status = 200, description = "Successfully updated showtime", body = ShowTimeDto),
        (status = 400, description = "Malformed timestamp text or non-positive price", body = ErrorDto),
        (status = 404, description = "Showtime, movie, or hall missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_showtime(
    State(state): State<AppState>,
    Path(showtime_id): Path<i32>,
    Json(payload): Json<UpdateShowTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    let showtime = service.update(showtime_id, payload).await?;

    Ok((StatusCode::OK, Json(showtime.into_dto())))
}

/// Delete a showtime.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `showtime_id` - ID of the showtime to delete
///
/// # Returns
/// - `204 No Content` - Showtime deleted
/// - `404 Not Found` - No showtime with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/showtimes/{showtime_id}",
    tag = SHOWTIME_TAG,
    params(
        ("showtime_id" = i32, Path, description = "Showtime ID")
    ),
    responses(
        (status = 204, description = "Showtime deleted"),
        (status = 404, description = "No showtime with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_showtime(
    State(state): State<AppState>,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ShowTimeService::new(&state.db);

    service.delete(showtime_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
