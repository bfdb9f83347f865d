//! Seat domain models and parameters.

use crate::model::seat::SeatDto;
use crate::server::error::{internal::InternalError, AppError};

/// Occupancy state of a single seat.
///
/// Stored as text in the database; [`Seat::from_entity`] rejects rows holding
/// anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Reserved,
}

impl SeatStatus {
    /// Returns the database/API text for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "AVAILABLE",
            SeatStatus::Reserved => "RESERVED",
        }
    }

    /// Parses database/API text into a status.
    ///
    /// # Arguments
    /// - `value` - The status text to parse
    ///
    /// # Returns
    /// - `Some(SeatStatus)` - When the text names a known status
    /// - `None` - Otherwise
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AVAILABLE" => Some(SeatStatus::Available),
            "RESERVED" => Some(SeatStatus::Reserved),
            _ => None,
        }
    }
}

/// A single seat within a cinema hall.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    /// Unique identifier for the seat.
    pub seat_id: i32,
    /// Row letter, "A" through however many rows the hall has.
    pub row: String,
    /// Seat number within the row, starting at 1.
    pub number: i32,
    /// Current occupancy state.
    pub status: SeatStatus,
    /// Hall the seat belongs to.
    pub hall_id: i32,
}

impl Seat {
    /// Converts an entity model to a seat domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Seat)` - The converted seat domain model
    /// - `Err(AppError)` - When the stored status text is not a known status
    pub fn from_entity(entity: entity::seat::Model) -> Result<Self, AppError> {
        let status = SeatStatus::parse(&entity.status).ok_or(InternalError::UnknownSeatStatus {
            value: entity.status,
        })?;

        Ok(Self {
            seat_id: entity.seat_id,
            row: entity.row,
            number: entity.number,
            status,
            hall_id: entity.hall_id,
        })
    }

    /// Converts the seat domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `SeatDto` - The converted seat DTO
    pub fn into_dto(self) -> SeatDto {
        SeatDto {
            seat_id: self.seat_id,
            row: self.row,
            number: self.number,
            status: self.status.as_str().to_string(),
            hall_id: self.hall_id,
        }
    }
}

/// Position of a seat to create within a hall.
///
/// New seats always start out [`SeatStatus::Available`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPosition {
    /// Row letter.
    pub row: String,
    /// Seat number within the row, starting at 1.
    pub number: i32,
}
