//! Cinema hall domain models and parameters.

use crate::model::hall::CinemaHallDto;

/// Cinema hall with a fixed seat capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct CinemaHall {
    /// Unique identifier for the hall.
    pub hall_id: i32,
    /// Display name of the hall.
    pub name: String,
    /// Physical location description.
    pub location: Option<String>,
    /// Number of seats the hall holds.
    pub capacity: i32,
}

impl CinemaHall {
    /// Converts an entity model to a hall domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `CinemaHall` - The converted hall domain model
    pub fn from_entity(entity: entity::cinema_hall::Model) -> Self {
        Self {
            hall_id: entity.hall_id,
            name: entity.name,
            location: entity.location,
            capacity: entity.capacity,
        }
    }

    /// Converts the hall domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CinemaHallDto` - The converted hall DTO
    pub fn into_dto(self) -> CinemaHallDto {
        CinemaHallDto {
            hall_id: self.hall_id,
            name: self.name,
            location: self.location,
            capacity: self.capacity,
        }
    }
}

/// Parameters for creating a hall.
///
/// Creating a hall also generates its seat bank from `capacity`.
#[derive(Debug, Clone)]
pub struct CreateCinemaHallParam {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

/// Parameters for updating an existing hall.
///
/// All fields are optional - only provided fields will be updated. Changing
/// `capacity` does not regenerate the hall's seats.
#[derive(Debug, Clone)]
pub struct UpdateCinemaHallParam {
    pub hall_id: i32,
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}
