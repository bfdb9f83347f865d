//! Cinema hall service for hall and seat bank management.
//!
//! This module provides the `CinemaHallService` for maintaining halls.
//! Creating a hall also generates its seat bank: seats are laid out in rows
//! of ten, lettered from `A`, and numbered from 1 within each row.

use sea_orm::DatabaseConnection;

use crate::model::hall::{CreateCinemaHallDto, UpdateCinemaHallDto};
use crate::server::{
    data::{hall::CinemaHallRepository, seat::SeatRepository},
    error::AppError,
    model::{
        hall::{CinemaHall, CreateCinemaHallParam, UpdateCinemaHallParam},
        seat::SeatPosition,
    },
};

/// Seats per row in a generated hall layout.
const ROW_WIDTH: i32 = 10;

/// Service providing business logic for cinema hall management.
///
/// This struct holds a reference to the database connection and provides
/// methods for hall CRUD along with the seat bank generation that accompanies
/// hall creation.
pub struct CinemaHallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CinemaHallService<'a> {
    /// Creates a new CinemaHallService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CinemaHallService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all halls, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<CinemaHall>, AppError> {
        let repo = CinemaHallRepository::new(self.db);
        repo.get_all().await
    }

    /// Retrieves a single hall.
    ///
    /// # Arguments
    /// - `hall_id` - ID of the hall to look up
    ///
    /// # Returns
    /// - `Ok(CinemaHall)` - The hall
    /// - `Err(AppError::NotFound)` - No hall with that ID
    pub async fn get_by_id(&self, hall_id: i32) -> Result<CinemaHall, AppError> {
        let repo = CinemaHallRepository::new(self.db);

        repo.get_by_id(hall_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Cinema hall with id {} not found", hall_id))
        })
    }

    /// Creates a hall and generates its seat bank.
    ///
    /// Every seat starts out available.
    ///
    /// # Arguments
    /// - `dto` - The creation request body
    ///
    /// # Returns
    /// - `Ok(CinemaHall)` - The created hall
    /// - `Err(AppError::BadRequest)` - Non-positive capacity
    pub async fn create(&self, dto: CreateCinemaHallDto) -> Result<CinemaHall, AppError> {
        if dto.capacity <= 0 {
            return Err(AppError::BadRequest(
                "Cinema hall capacity must be greater than 0".to_string(),
            ));
        }

        let repo = CinemaHallRepository::new(self.db);
        let hall = repo
            .create(CreateCinemaHallParam {
                name: dto.name,
                location: dto.location,
                capacity: dto.capacity,
            })
            .await?;

        let seat_repo = SeatRepository::new(self.db);
        seat_repo
            .insert_many(hall.hall_id, Self::generate_seat_positions(hall.capacity))
            .await?;

        tracing::info!(
            "Created hall '{}' with {} seats",
            hall.name,
            hall.capacity
        );

        Ok(hall)
    }

    /// Updates a hall, touching only provided fields.
    ///
    /// Changing the capacity does not regenerate the seat bank.
    ///
    /// # Arguments
    /// - `hall_id` - ID of the hall to update
    /// - `dto` - The update request body
    ///
    /// # Returns
    /// - `Ok(CinemaHall)` - The updated hall
    /// - `Err(AppError::NotFound)` - No hall with that ID
    /// - `Err(AppError::BadRequest)` - Non-positive capacity provided
    pub async fn update(
        &self,
        hall_id: i32,
        dto: UpdateCinemaHallDto,
    ) -> Result<CinemaHall, AppError> {
        let repo = CinemaHallRepository::new(self.db);

        if repo.get_by_id(hall_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Cinema hall with id {} not found",
                hall_id
            )));
        }

        if dto.capacity.is_some_and(|capacity| capacity <= 0) {
            return Err(AppError::BadRequest(
                "Cinema hall capacity must be greater than 0".to_string(),
            ));
        }

        repo.update(UpdateCinemaHallParam {
            hall_id,
            name: dto.name,
            location: dto.location,
            capacity: dto.capacity,
        })
        .await
    }

    /// Deletes a hall.
    ///
    /// Seats and showtimes referencing the hall are removed by the schema's
    /// cascade rules.
    ///
    /// # Arguments
    /// - `hall_id` - ID of the hall to delete
    ///
    /// # Returns
    /// - `Ok(())` - Hall deleted
    /// - `Err(AppError::NotFound)` - No hall with that ID
    pub async fn delete(&self, hall_id: i32) -> Result<(), AppError> {
        let repo = CinemaHallRepository::new(self.db);

        if repo.get_by_id(hall_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Cinema hall with id {} not found",
                hall_id
            )));
        }

        repo.delete(hall_id).await
    }

    /// Lays out seat positions for a hall of the given capacity.
    ///
    /// Seats fill rows of ten: seat 1 is `A1`, seat 10 is `A10`, seat 11 is
    /// `B1`, and so on. A non-positive capacity yields no seats.
    fn generate_seat_positions(capacity: i32) -> Vec<SeatPosition> {
        (1..=capacity.max(0))
            .map(|seat| {
                let index = seat - 1;
                let row = char::from(b'A' + (index / ROW_WIDTH) as u8);
                SeatPosition {
                    row: row.to_string(),
                    number: index % ROW_WIDTH + 1,
                }
            })
            .collect()
    }
}
