//! User domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::user::UserDto;
use crate::server::error::{internal::InternalError, AppError};
use crate::server::util::datetime::{normalize, render, render_value};

/// A registered user together with the status row it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub user_id: i32,
    /// Display name, if the user set one.
    pub user_name: Option<String>,
    /// Email address, unique across users.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// When the account was registered.
    pub registration_date: NaiveDateTime,
    /// Most recent sign-in, if any.
    pub last_login: Option<NaiveDateTime>,
    /// Name of the user's status, e.g. "Active".
    pub status_name: String,
    /// Role granted by the status, e.g. "user" or "admin".
    pub role: String,
}

impl User {
    /// Converts an entity model and its joined status to a user domain model
    /// at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The user entity model from the database
    /// - `status` - The status entity the user's `status_id` points at
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError)` - When a stored timestamp is blank or unparseable
    pub fn from_entity(
        entity: entity::user::Model,
        status: entity::user_status::Model,
    ) -> Result<Self, AppError> {
        let registration_date = normalize(Some(&entity.registration_date))?.ok_or(
            InternalError::MissingTimestamp {
                entity: "user",
                column: "registration_date",
            },
        )?;
        let last_login = normalize(entity.last_login.as_deref())?;

        Ok(Self {
            user_id: entity.user_id,
            user_name: entity.user_name,
            email: entity.email,
            phone: entity.phone,
            registration_date,
            last_login,
            status_name: status.status_name,
            role: status.role,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            user_name: self.user_name,
            email: self.email,
            phone: self.phone,
            registration_date: render_value(self.registration_date),
            last_login: render(self.last_login),
            status_name: self.status_name,
            role: self.role,
        }
    }
}

/// Parameters for registering a user.
///
/// The status row is resolved by the service and passed to the repository
/// separately as an ID.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

/// Parameters for updating an existing user's profile.
///
/// All fields are optional - only provided fields will be updated. Status
/// changes go through their own operation instead.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub user_id: i32,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
