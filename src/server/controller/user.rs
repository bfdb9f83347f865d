use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UpdateUserStatusDto, UserDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get every registered user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All users with their status and role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users with their status and role", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;
    let dtos: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single user by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to fetch
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "No user with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a new user.
///
/// The email must be unused. When no status name is given the user starts
/// out `"Active"`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User details and optional starting status
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Email already in use
/// - `404 Not Found` - The named status does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "The registered user", body = UserDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 404, description = "The named status does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user's contact details.
///
/// Only the provided fields change. Status changes go through the dedicated
/// status endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 404, description = "No user with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.update(user_id, payload).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Move a user to a different status.
///
/// The status is referenced by name and must already exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to move
/// - `payload` - Name of the target status
///
/// # Returns
/// - `200 OK` - The user under the new status
/// - `400 Bad Request` - Blank status name
/// - `404 Not Found` - No such user or status
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/status",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "The user under the new status", body = UserDto),
        (status = 400, description = "Blank status name", body = ErrorDto),
        (status = 404, description = "No such user or status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_user_status(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.change_status(user_id, &payload.status).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user to delete
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    service.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
