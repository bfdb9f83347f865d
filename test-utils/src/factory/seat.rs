//! Seat factory for creating test seat entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seats with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::seat::SeatFactory;
///
/// let seat = SeatFactory::new(&db, hall.hall_id)
///     .row("B")
///     .number(4)
///     .status("RESERVED")
///     .build()
///     .await?;
/// ```
pub struct SeatFactory<'a> {
    db: &'a DatabaseConnection,
    hall_id: i32,
    row: String,
    number: i32,
    status: String,
}

impl<'a> SeatFactory<'a> {
    /// Creates a new SeatFactory with default values.
    ///
    /// Defaults:
    /// - row: `"A"`
    /// - number: auto-incremented
    /// - status: `"AVAILABLE"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hall_id` - ID of an existing cinema hall
    pub fn new(db: &'a DatabaseConnection, hall_id: i32) -> Self {
        Self {
            db,
            hall_id,
            row: "A".to_string(),
            number: next_id() as i32,
            status: "AVAILABLE".to_string(),
        }
    }

    /// Sets the row letter for the seat.
    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.row = row.into();
        self
    }

    /// Sets the number for the seat.
    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Sets the raw status text for the seat.
    ///
    /// Accepts any text, including values outside the known status set, so
    /// tests can exercise handling of corrupt rows.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the seat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::seat::Model)` - Created seat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::seat::Model, DbErr> {
        entity::seat::ActiveModel {
            row: ActiveValue::Set(self.row),
            number: ActiveValue::Set(self.number),
            status: ActiveValue::Set(self.status),
            hall_id: ActiveValue::Set(self.hall_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seat with default values.
///
/// Shorthand for `SeatFactory::new(db, hall_id).build().await`.
pub async fn create_seat(
    db: &DatabaseConnection,
    hall_id: i32,
) -> Result<entity::seat::Model, DbErr> {
    SeatFactory::new(db, hall_id).build().await
}
