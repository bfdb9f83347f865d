use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hall::{CinemaHallDto, CreateCinemaHallDto, UpdateCinemaHallDto},
    },
    server::{error::AppError, service::hall::CinemaHallService, state::AppState},
};

/// Tag for grouping cinema hall endpoints in OpenAPI documentation
pub static HALL_TAG: &str = "halls";

/// Get every cinema hall.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All halls ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/halls",
    tag = HALL_TAG,
    responses(
        (status = 200, description = "All halls ordered by name", body = Vec<CinemaHallDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_halls(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CinemaHallService::new(&state.db);

    let halls = service.get_all().await?;
    let dtos: Vec<CinemaHallDto> = halls.into_iter().map(|hall| hall.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single cinema hall.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hall_id` - ID of the hall to fetch
///
/// # Returns
/// - `200 OK` - The hall
/// - `404 Not Found` - No hall with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/halls/{hall_id}",
    tag = HALL_TAG,
    params(
        ("hall_id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "The hall", body = CinemaHallDto),
        (status = 404, description = "No hall with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CinemaHallService::new(&state.db);

    let hall = service.get_by_id(hall_id).await?;

    Ok((StatusCode::OK, Json(hall.into_dto())))
}

/// Create a cinema hall.
///
/// A seat bank matching the hall's capacity is generated alongside it, laid
/// out in rows of ten.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Hall creation data
///
/// # Returns
/// - `201 Created` - Successfully created hall
/// - `400 Bad Request` - Non-positive capacity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/halls",
    tag = HALL_TAG,
    request_body = CreateCinemaHallDto,
    responses(
        (status = 201, description = "Successfully created hall", body = CinemaHallDto),
        (status = 400, description = "Non-positive capacity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hall(
    State(state): State<AppState>,
    Json(payload): Json<CreateCinemaHallDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CinemaHallService::new(&state.db);

    let hall = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(hall.into_dto())))
}

/// Update a cinema hall.
///
/// Only provided fields are touched. Changing the capacity does not
/// regenerate the seat bank.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hall_id` - ID of the hall to update
/// - `payload` - Hall update data
///
/// # Returns
/// - `200 OK` - Successfully updated hall
/// - `400 Bad Request` - Non-positive capacity provided
/// - `404 Not Found` - No hall with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/halls/{hall_id}",
    tag = HALL_TAG,
    params(
        ("hall_id" = i32, Path, description = "Cinema hall ID")
    ),
    request_body = UpdateCinemaHallDto,
    responses(
        (status = 200, description = "Successfully updated hall", body = CinemaHallDto),
        (status = 400, description = "Non-positive capacity provided", body = ErrorDto),
        (status = 404, description = "No hall with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<i32>,
    Json(payload): Json<UpdateCinemaHallDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CinemaHallService::new(&state.db);

    let hall = service.update(hall_id, payload).await?;

    Ok((StatusCode::OK, Json(hall.into_dto())))
}

/// Delete a cinema hall.
///
/// The hall's seats and showtimes are removed by the schema's cascade
/// rules.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hall_id` - ID of the hall to delete
///
/// # Returns
/// - `204 No Content` - Hall deleted
/// - `404 Not Found` - No hall with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/halls/{hall_id}",
    tag = HALL_TAG,
    params(
        ("hall_id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 204, description = "Hall deleted"),
        (status = 404, description = "No hall with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CinemaHallService::new(&state.db);

    service.delete(hall_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
