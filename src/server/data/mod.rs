//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Text timestamp columns cross into `chrono::NaiveDateTime` here, so anything above this
//! layer only ever sees normalized values.

pub mod banner;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
pub mod user_status;

#[cfg(test)]
mod test;
