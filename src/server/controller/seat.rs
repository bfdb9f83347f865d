use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        seat::{SeatDto, UpdateSeatStatusDto},
    },
    server::{error::AppError, service::seat::SeatService, state::AppState},
};

/// Tag for grouping seat endpoints in OpenAPI documentation
pub static SEAT_TAG: &str = "seats";

/// Get the full seat layout of a hall.
///
/// Seats are ordered by row then number.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hall_id` - ID of the hall whose seats to fetch
///
/// # Returns
/// - `200 OK` - Every seat in the hall
/// - `404 Not Found` - No hall with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/halls/{hall_id}/seats",
    tag = SEAT_TAG,
    params(
        ("hall_id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Every seat in the hall", body = Vec<SeatDto>),
        (status = 404, description = "No hall with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hall_seats(
    State(state): State<AppState>,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeatService::new(&state.db);

    let seats = service.layout_by_hall(hall_id).await?;
    let dtos: Vec<SeatDto> = seats.into_iter().map(|seat| seat.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the available seats of a hall.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hall_id` - ID of the hall whose available seats to fetch
///
/// # Returns
/// - `200 OK` - Available seats in the hall
/// - `404 Not Found` - No hall with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/halls/{hall_id}/seats/available",
    tag = SEAT_TAG,
    params(
        ("hall_id" = i32, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Available seats in the hall", body = Vec<SeatDto>),
        (status = 404, description = "No hall with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_hall_seats(
    State(state): State<AppState>,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeatService::new(&state.db);

    let seats = service.available_by_hall(hall_id).await?;
    let dtos: Vec<SeatDto> = seats.into_iter().map(|seat| seat.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the available seats for a showtime.
///
/// The showtime is resolved to its hosting hall, whose available seats are
/// returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `showtime_id` - ID of the showtime to look up availability for
///
/// # Returns
/// - `200 OK` - Available seats in the hosting hall
/// - `404 Not Found` - No showtime with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/seats/available/{showtime_id}",
    tag = SEAT_TAG,
    params(
        ("showtime_id" = i32, Path, description = "Showtime ID")
    ),
    responses(
        (status = 200, description = "Available seats in the hosting hall", body = Vec<SeatDto>),
        (status = 404, description = "No showtime with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_showtime_seats(
    State(state): State<AppState>,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeatService::new(&state.db);

    let seats = service.available_by_showtime(showtime_id).await?;
    let dtos: Vec<SeatDto> = seats.into_iter().map(|seat| seat.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Set a seat's occupancy status.
///
/// The status text must be `"AVAILABLE"` or `"RESERVED"`, exactly.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `seat_id` - ID of the seat to update
/// - `payload` - The requested status
///
/// # Returns
/// - `200 OK` - The updated seat
/// - `400 Bad Request` - Unrecognized status text
/// - `404 Not Found` - No seat with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/seats/{seat_id}/status",
    tag = SEAT_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    request_body = UpdateSeatStatusDto,
    responses(
        (status = 200, description = "The updated seat", body = SeatDto),
        (status = 400, description = "Unrecognized status text", body = ErrorDto),
        (status = 404, description = "No seat with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_seat_status(
    State(state): State<AppState>,
    Path(seat_id): Path<i32>,
    Json(payload): Json<UpdateSeatStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SeatService::new(&state.db);

    let seat = service.set_status(seat_id, &payload.status).await?;

    Ok((StatusCode::OK, Json(seat.into_dto())))
}
