//! Showtime domain models and parameters.
//!
//! A showtime schedules a movie in a hall at a price. The stored start and
//! end times are mixed-layout text; entity conversion normalizes them into
//! [`NaiveDateTime`] values, and rendering back to text happens only when a
//! DTO is produced or a row is written.

use chrono::NaiveDateTime;

use crate::{
    model::showtime::ShowTimeDto,
    server::{
        error::{internal::InternalError, AppError},
        util::datetime::{normalize, render, render_value},
    },
};

/// Scheduled screening of a movie in a hall.
///
/// Carries the display names of the movie and hall alongside their ids so
/// list responses need no extra lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowTime {
    /// Unique identifier for the showtime.
    pub showtime_id: i32,
    /// ID of the movie being screened.
    pub movie_id: i32,
    /// Title of the movie being screened.
    pub movie_title: String,
    /// ID of the hall hosting the screening.
    pub hall_id: i32,
    /// Name of the hall hosting the screening.
    pub hall_name: String,
    /// When the screening starts.
    pub start_time: NaiveDateTime,
    /// When the screening ends, if recorded.
    pub end_time: Option<NaiveDateTime>,
    /// Ticket price.
    pub price: f64,
}

impl ShowTime {
    /// Converts an entity model to a showtime domain model at the repository boundary.
    ///
    /// Normalizes both stored timestamp columns. The start time is required:
    /// text that fails to parse is a `Timestamp` error, and blank text in the
    /// NOT NULL column is a `MissingTimestamp` internal error.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `movie_title` - Title of the referenced movie
    /// - `hall_name` - Name of the referenced hall
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The converted showtime domain model
    /// - `Err(AppError)` - A stored timestamp could not be normalized
    pub fn from_entity(
        entity: entity::showtime::Model,
        movie_title: String,
        hall_name: String,
    ) -> Result<Self, AppError> {
        let start_time = normalize(Some(&entity.start_time))?.ok_or(
            InternalError::MissingTimestamp {
                entity: "showtime",
                column: "start_time",
            },
        )?;
        let end_time = normalize(entity.end_time.as_deref())?;

        Ok(Self {
            showtime_id: entity.showtime_id,
            movie_id: entity.movie_id,
            movie_title,
            hall_id: entity.hall_id,
            hall_name,
            start_time,
            end_time,
            price: entity.price,
        })
    }

    /// Converts the showtime domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `ShowTimeDto` - The converted showtime DTO with canonical timestamp text
    pub fn into_dto(self) -> ShowTimeDto {
        ShowTimeDto {
            showtime_id: self.showtime_id,
            movie_id: self.movie_id,
            movie_title: self.movie_title,
            hall_id: self.hall_id,
            hall_name: self.hall_name,
            start_time: render_value(self.start_time),
            end_time: render(self.end_time),
            price: self.price,
        }
    }
}

/// Parameters for scheduling a showtime.
///
/// Timestamps are already normalized; the service layer rejects malformed
/// request text before a param is built.
#[derive(Debug, Clone)]
pub struct CreateShowTimeParam {
    pub movie_id: i32,
    pub hall_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub price: f64,
}

/// Parameters for updating an existing showtime.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone)]
pub struct UpdateShowTimeParam {
    pub showtime_id: i32,
    pub movie_id: Option<i32>,
    pub hall_id: Option<i32>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub price: Option<f64>,
}
