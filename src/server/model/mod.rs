//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Text-stored timestamps become [`chrono::NaiveDateTime`] values during entity
//! conversion, so the rest of the application never touches raw timestamp text.

pub mod banner;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
