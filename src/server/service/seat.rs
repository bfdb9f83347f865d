//! Seat service for hall layouts and availability.
//!
//! This module provides the `SeatService` for reading a hall's seat bank,
//! filtering it down to available seats, resolving availability through a
//! showtime, and flipping a seat's occupancy status.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hall::CinemaHallRepository, seat::SeatRepository, showtime::ShowTimeRepository},
    error::AppError,
    model::seat::{Seat, SeatStatus},
};

/// Service providing business logic for seat availability.
///
/// This struct holds a reference to the database connection and provides
/// methods for seat layout and availability queries keyed by hall or by
/// showtime, plus the status transition used when a seat is taken or freed.
pub struct SeatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatService<'a> {
    /// Creates a new SeatService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeatService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the full seat layout of a hall, ordered by row then number.
    ///
    /// # Arguments
    /// - `hall_id` - ID of the hall
    ///
    /// # Returns
    /// - `Ok(Vec<Seat>)` - Every seat in the hall
    /// - `Err(AppError::NotFound)` - No hall with that ID
    pub async fn layout_by_hall(&self, hall_id: i32) -> Result<Vec<Seat>, AppError> {
        self.require_hall(hall_id).await?;

        let repo = SeatRepository::new(self.db);
        repo.get_by_hall(hall_id).await
    }

    /// Retrieves the available seats of a hall, ordered by row then number.
    ///
    /// # Arguments
    /// - `hall_id` - ID of the hall
    ///
    /// # Returns
    /// - `Ok(Vec<Seat>)` - Available seats in the hall
    /// - `Err(AppError::NotFound)` - No hall with that ID
    pub async fn available_by_hall(&self, hall_id: i32) -> Result<Vec<Seat>, AppError> {
        self.require_hall(hall_id).await?;

        let repo = SeatRepository::new(self.db);
        repo.get_by_hall_and_status(hall_id, SeatStatus::Available)
            .await
    }

    /// Retrieves the available seats for a showtime's hall.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime
    ///
    /// # Returns
    /// - `Ok(Vec<Seat>)` - Available seats in the hosting hall
    /// - `Err(AppError::NotFound)` - No showtime with that ID
    pub async fn available_by_showtime(&self, showtime_id: i32) -> Result<Vec<Seat>, AppError> {
        let showtime_repo = ShowTimeRepository::new(self.db);
        let showtime = showtime_repo.get_by_id(showtime_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Showtime with id {} not found", showtime_id))
        })?;

        let repo = SeatRepository::new(self.db);
        repo.get_by_hall_and_status(showtime.hall_id, SeatStatus::Available)
            .await
    }

    /// Sets a seat's occupancy status from request text.
    ///
    /// # Arguments
    /// - `seat_id` - ID of the seat
    /// - `status` - Requested status text, `"AVAILABLE"` or `"RESERVED"`
    ///
    /// # Returns
    /// - `Ok(Seat)` - The updated seat
    /// - `Err(AppError::BadRequest)` - The text names no known status
    /// - `Err(AppError::NotFound)` - No seat with that ID
    pub async fn set_status(&self, seat_id: i32, status: &str) -> Result<Seat, AppError> {
        let status = SeatStatus::parse(status).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid seat status '{}'. Expected AVAILABLE or RESERVED",
                status
            ))
        })?;

        let repo = SeatRepository::new(self.db);
        if repo.get_by_id(seat_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Seat with id {} not found",
                seat_id
            )));
        }

        repo.set_status(seat_id, status).await
    }

    /// Fails with `NotFound` unless the hall exists.
    async fn require_hall(&self, hall_id: i32) -> Result<(), AppError> {
        let hall_repo = CinemaHallRepository::new(self.db);

        if hall_repo.get_by_id(hall_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Cinema hall with id {} not found",
                hall_id
            )));
        }

        Ok(())
    }
}
