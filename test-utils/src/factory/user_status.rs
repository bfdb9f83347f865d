//! User status factory for creating test status entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user statuses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_status::UserStatusFactory;
///
/// let status = UserStatusFactory::new(&db)
///     .status_name("Admin")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserStatusFactory<'a> {
    db: &'a DatabaseConnection,
    status_name: String,
    role: String,
}

impl<'a> UserStatusFactory<'a> {
    /// Creates a new UserStatusFactory with default values.
    ///
    /// Defaults:
    /// - status_name: `"Status {id}"` where id is auto-incremented
    /// - role: `"user"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            status_name: format!("Status {}", id),
            role: "user".to_string(),
        }
    }

    /// Sets the unique name for the status.
    pub fn status_name(mut self, status_name: impl Into<String>) -> Self {
        self.status_name = status_name.into();
        self
    }

    /// Sets the role for the status.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the status entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_status::Model)` - Created status entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_status::Model, DbErr> {
        entity::user_status::ActiveModel {
            status_name: ActiveValue::Set(self.status_name),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a status with default values.
///
/// Shorthand for `UserStatusFactory::new(db).build().await`.
pub async fn create_status(db: &DatabaseConnection) -> Result<entity::user_status::Model, DbErr> {
    UserStatusFactory::new(db).build().await
}

/// Creates a status with a specific name and role.
///
/// Shorthand for `UserStatusFactory::new(db).status_name(name).role(role).build().await`.
pub async fn create_status_named(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
) -> Result<entity::user_status::Model, DbErr> {
    UserStatusFactory::new(db)
        .status_name(name)
        .role(role)
        .build()
        .await
}
