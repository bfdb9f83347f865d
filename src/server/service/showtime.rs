//! Showtime service for scheduling business logic.
//!
//! This module provides the `ShowTimeService` for listing, scheduling, and
//! maintaining showtimes. Request timestamps arrive as raw text and are
//! normalized here; malformed text is rejected before anything touches the
//! database, and a missing end time is derived from the movie's runtime.

use chrono::{Duration, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::model::showtime::{CreateShowTimeDto, UpdateShowTimeDto};
use crate::server::{
    data::{hall::CinemaHallRepository, movie::MovieRepository, showtime::ShowTimeRepository},
    error::AppError,
    model::showtime::{CreateShowTimeParam, ShowTime, UpdateShowTimeParam},
    util::datetime::normalize,
};

/// Service providing business logic for showtime scheduling.
///
/// This struct holds a reference to the database connection and provides
/// methods for showtime listings and admin maintenance, validating request
/// timestamps and referenced movies and halls along the way.
pub struct ShowTimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowTimeService<'a> {
    /// Creates a new ShowTimeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ShowTimeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all showtimes, soonest first.
    ///
    /// Stored times are mixed-layout text, so ordering happens here on the
    /// normalized values rather than in SQL.
    ///
    /// # Returns
    /// - `Ok(Vec<ShowTime>)` - All showtimes ordered by start time
    /// - `Err(AppError)` - Database error or a stored timestamp failed to normalize
    pub async fn get_all(&self) -> Result<Vec<ShowTime>, AppError> {
        let repo = ShowTimeRepository::new(self.db);
        let mut showtimes = repo.get_all().await?;
        showtimes.sort_by_key(|showtime| showtime.start_time);
        Ok(showtimes)
    }

    /// Retrieves the showtimes for a movie, soonest first.
    ///
    /// The movie is not required to exist; an unknown ID yields an empty
    /// listing.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie whose showtimes to list
    ///
    /// # Returns
    /// - `Ok(Vec<ShowTime>)` - The movie's showtimes ordered by start time
    /// - `Err(AppError)` - Database error or a stored timestamp failed to normalize
    pub async fn get_by_movie(&self, movie_id: i32) -> Result<Vec<ShowTime>, AppError> {
        let repo = ShowTimeRepository::new(self.db);
        let mut showtimes = repo.get_by_movie(movie_id).await?;
        showtimes.sort_by_key(|showtime| showtime.start_time);
        Ok(showtimes)
    }

    /// Retrieves a single showtime.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime to look up
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The showtime
    /// - `Err(AppError::NotFound)` - No showtime with that ID
    pub async fn get_by_id(&self, showtime_id: i32) -> Result<ShowTime, AppError> {
        let repo = ShowTimeRepository::new(self.db);

        repo.get_by_id(showtime_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Showtime with id {} not found", showtime_id))
        })
    }

    /// Schedules a showtime from an admin request.
    ///
    /// The start time text must normalize, the price must be positive, and
    /// the referenced movie and hall must exist. When no end time is given it
    /// defaults to the start time plus the movie's runtime.
    ///
    /// # Arguments
    /// - `dto` - The creation request body
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The scheduled showtime
    /// - `Err(AppError::BadRequest)` - Malformed timestamp text or non-positive price
    /// - `Err(AppError::NotFound)` - Referenced movie or hall missing
    pub async fn create(&self, dto: CreateShowTimeDto) -> Result<ShowTime, AppError> {
        let start_time = Self::parse_required_time("start time", &dto.start_time)?;
        let end_time = Self::parse_optional_time("end time", dto.end_time.as_deref())?;

        if dto.price <= 0.0 {
            return Err(AppError::BadRequest(
                "Showtime price must be greater than 0".to_string(),
            ));
        }

        let movie_repo = MovieRepository::new(self.db);
        let movie = movie_repo.get_by_id(dto.movie_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Movie with id {} not found", dto.movie_id))
        })?;

        let hall_repo = CinemaHallRepository::new(self.db);
        if hall_repo.get_by_id(dto.hall_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Cinema hall with id {} not found",
                dto.hall_id
            )));
        }

        let end_time = end_time.or_else(|| {
            movie
                .duration
                .map(|minutes| start_time + Duration::minutes(i64::from(minutes)))
        });

        let repo = ShowTimeRepository::new(self.db);
        repo.create(CreateShowTimeParam {
            movie_id: dto.movie_id,
            hall_id: dto.hall_id,
            start_time,
            end_time,
            price: dto.price,
        })
        .await
    }

    /// Updates a showtime from an admin request, touching only provided fields.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime to update
    /// - `dto` - The update request body
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The updated showtime
    /// - `Err(AppError::NotFound)` - Showtime, movie, or hall missing
    /// - `Err(AppError::BadRequest)` - Malformed timestamp text or non-positive price
    pub async fn update(
        &self,
        showtime_id: i32,
        dto: UpdateShowTimeDto,
    ) -> Result<ShowTime, AppError> {
        let repo = ShowTimeRepository::new(self.db);

        if repo.get_by_id(showtime_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Showtime with id {} not found",
                showtime_id
            )));
        }

        let start_time = Self::parse_optional_time("start time", dto.start_time.as_deref())?;
        let end_time = Self::parse_optional_time("end time", dto.end_time.as_deref())?;

        if dto.price.is_some_and(|price| price <= 0.0) {
            return Err(AppError::BadRequest(
                "Showtime price must be greater than 0".to_string(),
            ));
        }

        if let Some(movie_id) = dto.movie_id {
            let movie_repo = MovieRepository::new(self.db);
            if movie_repo.get_by_id(movie_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Movie with id {} not found",
                    movie_id
                )));
            }
        }
        if let Some(hall_id) = dto.hall_id {
            let hall_repo = CinemaHallRepository::new(self.db);
            if hall_repo.get_by_id(hall_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Cinema hall with id {} not found",
                    hall_id
                )));
            }
        }

        repo.update(UpdateShowTimeParam {
            showtime_id,
            movie_id: dto.movie_id,
            hall_id: dto.hall_id,
            start_time,
            end_time,
            price: dto.price,
        })
        .await
    }

    /// Deletes a showtime.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime to delete
    ///
    /// # Returns
    /// - `Ok(())` - Showtime deleted
    /// - `Err(AppError::NotFound)` - No showtime with that ID
    pub async fn delete(&self, showtime_id: i32) -> Result<(), AppError> {
        let repo = ShowTimeRepository::new(self.db);

        if repo.get_by_id(showtime_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Showtime with id {} not found",
                showtime_id
            )));
        }

        repo.delete(showtime_id).await
    }

    /// Normalizes required request timestamp text.
    ///
    /// Absent or blank text is a validation failure for a required field, as
    /// is text no supported layout accepts.
    fn parse_required_time(field: &str, raw: &str) -> Result<NaiveDateTime, AppError> {
        match normalize(Some(raw)) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(AppError::BadRequest(format!(
                "Showtime {} is required",
                field
            ))),
            Err(err) => Err(AppError::BadRequest(format!(
                "Invalid {} '{}': {}",
                field, raw, err
            ))),
        }
    }

    /// Normalizes optional request timestamp text.
    ///
    /// Absent and blank text both mean the field was not provided.
    fn parse_optional_time(
        field: &str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDateTime>, AppError> {
        match raw {
            Some(raw) => normalize(Some(raw)).map_err(|err| {
                AppError::BadRequest(format!("Invalid {} '{}': {}", field, raw, err))
            }),
            None => Ok(None),
        }
    }
}
