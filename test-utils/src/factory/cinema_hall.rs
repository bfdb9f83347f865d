//! Cinema hall factory for creating test hall entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cinema halls with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::cinema_hall::CinemaHallFactory;
///
/// let hall = CinemaHallFactory::new(&db)
///     .name("IMAX")
///     .capacity(50)
///     .build()
///     .await?;
/// ```
pub struct CinemaHallFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    capacity: i32,
}

impl<'a> CinemaHallFactory<'a> {
    /// Creates a new CinemaHallFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hall {id}"` where id is auto-incremented
    /// - location: `None`
    /// - capacity: `20`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hall {}", id),
            location: None,
            capacity: 20,
        }
    }

    /// Sets the name for the hall.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the location for the hall.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the seat capacity for the hall.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the hall entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::cinema_hall::Model)` - Created hall entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::cinema_hall::Model, DbErr> {
        entity::cinema_hall::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            capacity: ActiveValue::Set(self.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hall with default values.
///
/// Shorthand for `CinemaHallFactory::new(db).build().await`.
pub async fn create_hall(db: &DatabaseConnection) -> Result<entity::cinema_hall::Model, DbErr> {
    CinemaHallFactory::new(db).build().await
}

/// Creates a hall with a specific capacity.
///
/// Shorthand for `CinemaHallFactory::new(db).capacity(capacity).build().await`.
pub async fn create_hall_with_capacity(
    db: &DatabaseConnection,
    capacity: i32,
) -> Result<entity::cinema_hall::Model, DbErr> {
    CinemaHallFactory::new(db).capacity(capacity).build().await
}
