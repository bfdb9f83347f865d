use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
    },
    server::{error::AppError, service::banner::BannerService, state::AppState},
};

/// Tag for grouping promotional banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banners";

/// Get the banners currently running.
///
/// Only banners that are enabled and whose display window covers the current
/// moment are returned, ordered by display order. Storage failures degrade to
/// an empty list so the storefront never breaks over a carousel.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Banners live right now
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "Banners live right now", body = Vec<BannerDto>)
    ),
)]
pub async fn get_active_banners(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banners = service.get_active().await?;
    let dtos: Vec<BannerDto> = banners.into_iter().map(|banner| banner.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get every banner, live or not.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All banners
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/banners/all",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "All banners", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_banners(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banners = service.get_all().await?;
    let dtos: Vec<BannerDto> = banners.into_iter().map(|banner| banner.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single banner by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `banner_id` - ID of the banner to fetch
///
/// # Returns
/// - `200 OK` - The banner
/// - `404 Not Found` - No banner with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/banners/{banner_id}",
    tag = BANNER_TAG,
    params(
        ("banner_id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "The banner", body = BannerDto),
        (status = 404, description = "No banner with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banner = service.get_by_id(banner_id).await?;

    Ok((StatusCode::OK, Json(banner.into_dto())))
}

/// Create a new promotional banner.
///
/// Omitted window bounds default to a thirty day run starting now. Omitted
/// flags default to an enabled banner at display order zero.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Banner content and display window
///
/// # Returns
/// - `201 Created` - The created banner
/// - `400 Bad Request` - Malformed window timestamp
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = CreateBannerDto,
    responses(
        (status = 201, description = "The created banner", body = BannerDto),
        (status = 400, description = "Malformed window timestamp", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(payload): Json<CreateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banner = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(banner.into_dto())))
}

/// Update an existing banner.
///
/// Only the provided fields change.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `banner_id` - ID of the banner to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated banner
/// - `400 Bad Request` - Malformed window timestamp
/// - `404 Not Found` - No banner with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/banners/{banner_id}",
    tag = BANNER_TAG,
    params(
        ("banner_id" = i32, Path, description = "Banner ID")
    ),
    request_body = UpdateBannerDto,
    responses(
        (status = 200, description = "The updated banner", body = BannerDto),
        (status = 400, description = "Malformed window timestamp", body = ErrorDto),
        (status = 404, description = "No banner with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<i32>,
    Json(payload): Json<UpdateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    let banner = service.update(banner_id, payload).await?;

    Ok((StatusCode::OK, Json(banner.into_dto())))
}

/// Delete a banner.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `banner_id` - ID of the banner to delete
///
/// # Returns
/// - `204 No Content` - Banner deleted
/// - `404 Not Found` - No banner with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/banners/{banner_id}",
    tag = BANNER_TAG,
    params(
        ("banner_id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 404, description = "No banner with that ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(banner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    service.delete(banner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Record a click on a banner.
///
/// Click tracking is best effort. The request succeeds even when the banner
/// does not exist or the counter cannot be bumped.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `banner_id` - ID of the clicked banner
///
/// # Returns
/// - `200 OK` - Click acknowledged
#[utoipa::path(
    post,
    path = "/api/banners/{banner_id}/click",
    tag = BANNER_TAG,
    params(
        ("banner_id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Click acknowledged")
    ),
)]
pub async fn track_banner_click(
    State(state): State<AppState>,
    Path(banner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db);

    service.track_click(banner_id).await?;

    Ok(StatusCode::OK)
}
