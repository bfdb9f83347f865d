//! Route table and OpenAPI document assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        banner::{
            __path_create_banner, __path_delete_banner, __path_get_active_banners,
            __path_get_all_banners, __path_get_banner, __path_track_banner_click,
            __path_update_banner, create_banner, delete_banner, get_active_banners,
            get_all_banners, get_banner, track_banner_click, update_banner, BANNER_TAG,
        },
        hall::{
            __path_create_hall, __path_delete_hall, __path_get_hall, __path_get_halls,
            __path_update_hall, create_hall, delete_hall, get_hall, get_halls, update_hall,
            HALL_TAG,
        },
        movie::{
            __path_archive_movie, __path_create_movie, __path_delete_movie,
            __path_get_active_movie, __path_get_active_movies, __path_get_all_movies,
            __path_get_featured_movies, __path_get_genres, __path_get_movie_showtime_count,
            __path_get_movie_showtimes, __path_get_release_years, __path_search_movies,
            __path_update_movie, archive_movie, create_movie, delete_movie, get_active_movie,
            get_active_movies, get_all_movies, get_featured_movies, get_genres,
            get_movie_showtime_count, get_movie_showtimes, get_release_years, search_movies,
            update_movie, MOVIE_TAG,
        },
        seat::{
            __path_get_available_hall_seats, __path_get_available_showtime_seats,
            __path_get_hall_seats, __path_set_seat_status, get_available_hall_seats,
            get_available_showtime_seats, get_hall_seats, set_seat_status, SEAT_TAG,
        },
        showtime::{
            __path_create_showtime, __path_delete_showtime, __path_get_showtime,
            __path_get_showtimes, __path_get_showtimes_by_movie, __path_update_showtime,
            create_showtime, delete_showtime, get_showtime, get_showtimes,
            get_showtimes_by_movie, update_showtime, SHOWTIME_TAG,
        },
        user::{
            __path_change_user_status, __path_create_user, __path_delete_user, __path_get_user,
            __path_get_users, __path_update_user, change_user_status, create_user, delete_user,
            get_user, get_users, update_user, USER_TAG,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flixmate API",
        description = "Movie ticketing backend: catalog, schedules, seating, banners, and user administration"
    ),
    tags(
        (name = MOVIE_TAG, description = "Movie catalog, public and administrative"),
        (name = SHOWTIME_TAG, description = "Screening schedule management"),
        (name = HALL_TAG, description = "Cinema hall management"),
        (name = SEAT_TAG, description = "Seat layouts and occupancy"),
        (name = BANNER_TAG, description = "Promotional banner management"),
        (name = USER_TAG, description = "User administration")
    )
)]
struct ApiDoc;

fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_active_movies))
        .routes(routes!(search_movies))
        .routes(routes!(get_active_movie))
        .routes(routes!(get_movie_showtimes))
        .routes(routes!(get_genres))
        .routes(routes!(get_release_years))
        .routes(routes!(get_featured_movies))
        .routes(routes!(get_all_movies, create_movie))
        .routes(routes!(update_movie, delete_movie))
        .routes(routes!(archive_movie))
        .routes(routes!(get_movie_showtime_count))
        .routes(routes!(get_showtimes))
        .routes(routes!(get_showtime))
        .routes(routes!(get_showtimes_by_movie))
        .routes(routes!(create_showtime))
        .routes(routes!(update_showtime, delete_showtime))
        .routes(routes!(get_halls))
        .routes(routes!(get_hall))
        .routes(routes!(get_hall_seats))
        .routes(routes!(get_available_hall_seats))
        .routes(routes!(create_hall))
        .routes(routes!(update_hall, delete_hall))
        .routes(routes!(get_available_showtime_seats))
        .routes(routes!(set_seat_status))
        .routes(routes!(get_active_banners, create_banner))
        .routes(routes!(get_all_banners))
        .routes(routes!(get_banner, update_banner, delete_banner))
        .routes(routes!(track_banner_click))
        .routes(routes!(get_users, create_user))
        .routes(routes!(get_user, update_user, delete_user))
        .routes(routes!(change_user_status))
        .split_for_parts()
}

/// Builds the application router with every API route, the Swagger UI, and a
/// permissive CORS layer for browser clients.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
