//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern. The `registration_date` and `last_login` builder
//! methods take raw text so tests can store any of the legacy timestamp layouts
//! found in production data.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db, status.status_id)
///     .email("alice@example.com")
///     .registration_date("2025-09-17 10:30")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: Option<String>,
    email: String,
    phone: Option<String>,
    registration_date: String,
    last_login: Option<String>,
    status_id: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - phone: `None`
    /// - registration_date: `"2025-09-17T10:30:00"`
    /// - last_login: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `status_id` - ID of an existing status row
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, status_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: Some(format!("User {}", id)),
            email: format!("user{}@example.com", id),
            phone: None,
            registration_date: "2025-09-17T10:30:00".to_string(),
            last_login: None,
            status_id,
        }
    }

    /// Sets the display name for the user.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the phone number for the user.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the raw registration date text for the user.
    pub fn registration_date(mut self, registration_date: impl Into<String>) -> Self {
        self.registration_date = registration_date.into();
        self
    }

    /// Sets the raw last login text for the user.
    pub fn last_login(mut self, last_login: impl Into<String>) -> Self {
        self.last_login = Some(last_login.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_name: ActiveValue::Set(self.user_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            registration_date: ActiveValue::Set(self.registration_date),
            last_login: ActiveValue::Set(self.last_login),
            status_id: ActiveValue::Set(self.status_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db, status_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `status_id` - ID of an existing status row
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db, status.status_id).await?;
/// ```
pub async fn create_user(
    db: &DatabaseConnection,
    status_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, status_id).build().await
}
