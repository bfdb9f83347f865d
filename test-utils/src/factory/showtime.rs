//! Showtime factory for creating test showtime entities.
//!
//! The `start_time` and `end_time` builder methods take raw text rather than
//! `NaiveDateTime`, which lets tests store any of the legacy timestamp layouts
//! found in production data.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test showtimes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::showtime::ShowTimeFactory;
///
/// let showtime = ShowTimeFactory::new(&db, movie.movie_id, hall.hall_id)
///     .start_time("2025-09-18 18:00")
///     .price(15.0)
///     .build()
///     .await?;
/// ```
pub struct ShowTimeFactory<'a> {
    db: &'a DatabaseConnection,
    movie_id: i32,
    hall_id: i32,
    start_time: String,
    end_time: Option<String>,
    price: f64,
}

impl<'a> ShowTimeFactory<'a> {
    /// Creates a new ShowTimeFactory with default values.
    ///
    /// Defaults:
    /// - start_time: `"2025-09-18T18:00:00"`
    /// - end_time: `None`
    /// - price: `12.5`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `movie_id` - ID of an existing movie
    /// - `hall_id` - ID of an existing cinema hall
    pub fn new(db: &'a DatabaseConnection, movie_id: i32, hall_id: i32) -> Self {
        Self {
            db,
            movie_id,
            hall_id,
            start_time: "2025-09-18T18:00:00".to_string(),
            end_time: None,
            price: 12.5,
        }
    }

    /// Sets the raw start time text for the showtime.
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    /// Sets the raw end time text for the showtime.
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Sets the ticket price for the showtime.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the showtime entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::showtime::Model)` - Created showtime entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::showtime::Model, DbErr> {
        entity::showtime::ActiveModel {
            movie_id: ActiveValue::Set(self.movie_id),
            hall_id: ActiveValue::Set(self.hall_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            price: ActiveValue::Set(self.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a showtime with default values.
///
/// Shorthand for `ShowTimeFactory::new(db, movie_id, hall_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `movie_id` - ID of an existing movie
/// - `hall_id` - ID of an existing cinema hall
///
/// # Returns
/// - `Ok(entity::showtime::Model)` - Created showtime entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_showtime(
    db: &DatabaseConnection,
    movie_id: i32,
    hall_id: i32,
) -> Result<entity::showtime::Model, DbErr> {
    ShowTimeFactory::new(db, movie_id, hall_id).build().await
}
