//! HTTP request handlers for every API endpoint.
//!
//! Controllers are thin: they deserialize the request, call the matching
//! service, and map the outcome to a status code and DTO. Each handler carries
//! a `#[utoipa::path]` annotation so the OpenAPI document stays next to the
//! code it describes. Error responses are produced by [`AppError`]'s
//! `IntoResponse` impl rather than per handler.
//!
//! [`AppError`]: crate::server::error::AppError

pub mod banner;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
