//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a showtime with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Movie
/// 2. Cinema Hall
/// 3. Showtime
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((movie, hall, showtime))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_showtime_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::movie::Model,
        entity::cinema_hall::Model,
        entity::showtime::Model,
    ),
    DbErr,
> {
    let movie = crate::factory::movie::create_movie(db).await?;
    let hall = crate::factory::cinema_hall::create_hall(db).await?;
    let showtime =
        crate::factory::showtime::create_showtime(db, movie.movie_id, hall.hall_id).await?;

    Ok((movie, hall, showtime))
}

/// Creates a user with a fresh status row.
///
/// This creates a status with the given name and role, then a user assigned
/// to it. Useful when a test needs a user but does not care about sharing a
/// status row with other users.
///
/// # Arguments
/// - `db` - Database connection
/// - `status_name` - Name for the status row
/// - `role` - Role for the status row
///
/// # Returns
/// - `Ok((status, user))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_status(
    db: &DatabaseConnection,
    status_name: &str,
    role: &str,
) -> Result<(entity::user_status::Model, entity::user::Model), DbErr> {
    let status = crate::factory::user_status::create_status_named(db, status_name, role).await?;
    let user = crate::factory::user::create_user(db, status.status_id).await?;

    Ok((status, user))
}
