//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let movie = factory::movie::create_movie(&db).await?;
//!     let hall = factory::cinema_hall::create_hall(&db).await?;
//!
//!     // Create with all dependencies
//!     let (movie, hall, showtime) =
//!         factory::helpers::create_showtime_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let movie = factory::movie::MovieFactory::new(&db)
//!     .title("The Long Goodbye")
//!     .genre("Noir")
//!     .is_active(false)
//!     .build()
//!     .await?;
//!
//! // Timestamp columns accept any raw text, so tests can store legacy layouts
//! let showtime = factory::showtime::ShowTimeFactory::new(&db, movie.movie_id, hall.hall_id)
//!     .start_time("2025-09-18 18:00")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `movie` - Create movie entities
//! - `cinema_hall` - Create cinema hall entities
//! - `showtime` - Create showtime entities
//! - `seat` - Create seat entities
//! - `user_status` - Create user status entities
//! - `user` - Create user entities
//! - `banner` - Create promotional banner entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod banner;
pub mod cinema_hall;
pub mod helpers;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
pub mod user_status;

// Re-export commonly used factory functions for concise usage
pub use banner::create_banner;
pub use cinema_hall::{create_hall, create_hall_with_capacity};
pub use movie::create_movie;
pub use seat::create_seat;
pub use showtime::create_showtime;
pub use user::create_user;
pub use user_status::{create_status, create_status_named};
