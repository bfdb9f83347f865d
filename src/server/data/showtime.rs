//! Showtime data repository for database operations.
//!
//! This module provides the `ShowTimeRepository` for managing showtime records in the
//! database. Reads join the related movie and cinema hall so callers get display names
//! without extra queries, and the legacy text `start_time`/`end_time` columns are
//! normalized to `NaiveDateTime` at this boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::error::AppError;
use crate::server::model::showtime::{CreateShowTimeParam, ShowTime, UpdateShowTimeParam};
use crate::server::util::datetime::{render, render_value};

/// Repository providing database operations for showtime management.
///
/// Showtime rows are never ordered by their text `start_time` column in SQL
/// since the stored layouts do not sort lexicographically. Callers sort the
/// normalized values instead.
pub struct ShowTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowTimeRepository<'a> {
    /// Creates a new ShowTimeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ShowTimeRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all showtimes with their movie and hall names.
    ///
    /// # Returns
    /// - `Ok(Vec<ShowTime>)` - All showtimes, ordered by ID
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn get_all(&self) -> Result<Vec<ShowTime>, AppError> {
        let rows = entity::prelude::Showtime::find()
            .find_also_related(entity::prelude::Movie)
            .order_by_asc(entity::showtime::Column::ShowtimeId)
            .all(self.db)
            .await?;

        self.hydrate(rows).await
    }

    /// Gets a showtime by ID with its movie and hall names.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(ShowTime))` - Showtime found
    /// - `Ok(None)` - No showtime with that ID
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn get_by_id(&self, showtime_id: i32) -> Result<Option<ShowTime>, AppError> {
        let row = entity::prelude::Showtime::find_by_id(showtime_id)
            .find_also_related(entity::prelude::Movie)
            .one(self.db)
            .await?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Gets all showtimes for a movie with their movie and hall names.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie whose showtimes to retrieve
    ///
    /// # Returns
    /// - `Ok(Vec<ShowTime>)` - Showtimes for the movie, ordered by ID
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn get_by_movie(&self, movie_id: i32) -> Result<Vec<ShowTime>, AppError> {
        let rows = entity::prelude::Showtime::find()
            .find_also_related(entity::prelude::Movie)
            .filter(entity::showtime::Column::MovieId.eq(movie_id))
            .order_by_asc(entity::showtime::Column::ShowtimeId)
            .all(self.db)
            .await?;

        self.hydrate(rows).await
    }

    /// Creates a new showtime.
    ///
    /// Timestamps are rendered to the canonical text layout on the way in, so
    /// rows written here always normalize back without precision loss.
    ///
    /// # Arguments
    /// - `param` - Showtime creation parameters
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The created showtime with movie and hall names
    /// - `Err(AppError)` - Database error during insert or the re-fetch
    pub async fn create(&self, param: CreateShowTimeParam) -> Result<ShowTime, AppError> {
        let entity = entity::showtime::ActiveModel {
            movie_id: ActiveValue::Set(param.movie_id),
            hall_id: ActiveValue::Set(param.hall_id),
            start_time: ActiveValue::Set(render_value(param.start_time)),
            end_time: ActiveValue::Set(render(param.end_time)),
            price: ActiveValue::Set(param.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.showtime_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Showtime with id {} not found after creation",
                entity.showtime_id
            )))
            .map_err(AppError::from)
    }

    /// Updates a showtime, touching only the provided fields.
    ///
    /// # Arguments
    /// - `param` - Showtime update parameters
    ///
    /// # Returns
    /// - `Ok(ShowTime)` - The updated showtime with movie and hall names
    /// - `Err(AppError)` - Showtime not found, or database error during update
    pub async fn update(&self, param: UpdateShowTimeParam) -> Result<ShowTime, AppError> {
        let entity = entity::prelude::Showtime::find_by_id(param.showtime_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Showtime with id {} not found",
                param.showtime_id
            )))?;

        let mut active_model: entity::showtime::ActiveModel = entity.into();
        if let Some(movie_id) = param.movie_id {
            active_model.movie_id = ActiveValue::Set(movie_id);
        }
        if let Some(hall_id) = param.hall_id {
            active_model.hall_id = ActiveValue::Set(hall_id);
        }
        if let Some(start_time) = param.start_time {
            active_model.start_time = ActiveValue::Set(render_value(start_time));
        }
        if let Some(end_time) = param.end_time {
            active_model.end_time = ActiveValue::Set(Some(render_value(end_time)));
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.showtime_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Showtime with id {} not found after update",
                updated.showtime_id
            )))
            .map_err(AppError::from)
    }

    /// Deletes a showtime.
    ///
    /// # Arguments
    /// - `showtime_id` - ID of the showtime to delete
    ///
    /// # Returns
    /// - `Ok(())` - Deleted, or no matching showtime existed
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, showtime_id: i32) -> Result<(), AppError> {
        entity::prelude::Showtime::delete_by_id(showtime_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes all showtimes for a movie.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie whose showtimes to delete
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of showtimes deleted
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete_by_movie(&self, movie_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Showtime::delete_many()
            .filter(entity::showtime::Column::MovieId.eq(movie_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the showtimes scheduled for a movie.
    ///
    /// # Arguments
    /// - `movie_id` - ID of the movie whose showtimes to count
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of showtimes for the movie
    /// - `Err(AppError)` - Database error during count
    pub async fn count_by_movie(&self, movie_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Showtime::find()
            .filter(entity::showtime::Column::MovieId.eq(movie_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Counts all showtimes
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::Showtime::find().count(self.db).await?;

        Ok(count)
    }

    /// Converts joined rows to domain models, batch-loading hall names.
    ///
    /// `find_also_related` covers one relation, so the hall names come from a
    /// single follow-up query keyed by hall ID.
    async fn hydrate(
        &self,
        rows: Vec<(entity::showtime::Model, Option<entity::movie::Model>)>,
    ) -> Result<Vec<ShowTime>, AppError> {
        let hall_ids: Vec<i32> = rows.iter().map(|(showtime, _)| showtime.hall_id).collect();
        let hall_names: HashMap<i32, String> = if hall_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::CinemaHall::find()
                .filter(entity::cinema_hall::Column::HallId.is_in(hall_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|hall| (hall.hall_id, hall.name))
                .collect()
        };

        let mut showtimes = Vec::with_capacity(rows.len());
        for (showtime, movie) in rows {
            let movie = movie.ok_or(DbErr::RecordNotFound(format!(
                "Movie for showtime {} not found",
                showtime.showtime_id
            )))?;
            let hall_name =
                hall_names
                    .get(&showtime.hall_id)
                    .cloned()
                    .ok_or(DbErr::RecordNotFound(format!(
                        "Cinema hall for showtime {} not found",
                        showtime.showtime_id
                    )))?;

            showtimes.push(ShowTime::from_entity(showtime, movie.title, hall_name)?);
        }

        Ok(showtimes)
    }
}
