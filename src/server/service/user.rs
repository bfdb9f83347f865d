//! User service for registration and account management.
//!
//! This module provides the `UserService` for registering users, maintaining
//! their profiles, and moving them between statuses. A user's status row
//! carries the role, so a status change is also a role change.

use sea_orm::DatabaseConnection;

use crate::model::user::{CreateUserDto, UpdateUserDto};
use crate::server::{
    data::{user::UserRepository, user_status::UserStatusRepository},
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Status assigned to registrations that name none.
const DEFAULT_STATUS: &str = "Active";

/// Service providing business logic for user accounts.
///
/// This struct holds a reference to the database connection and provides
/// methods for registration, profile updates, and status changes, resolving
/// status names to rows before anything is written.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with their status names and roles.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);
        repo.get_all().await
    }

    /// Retrieves a single user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to look up
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))
    }

    /// Registers a user.
    ///
    /// The email must be unused. The requested status name is resolved to a
    /// status row, falling back to `"Active"` when the request names none.
    ///
    /// # Arguments
    /// - `dto` - The registration request body
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::NotFound)` - Requested status does not exist
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already in use".to_string()));
        }

        let status_name = match dto.status.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_STATUS,
        };
        let status = self.require_status(status_name).await?;

        repo.create(
            CreateUserParam {
                user_name: dto.user_name,
                email: dto.email,
                phone: dto.phone,
            },
            status.status_id,
        )
        .await
    }

    /// Updates a user's profile, touching only provided fields.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to update
    /// - `dto` - The update request body
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update(&self, user_id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        repo.update(UpdateUserParam {
            user_id,
            user_name: dto.user_name,
            email: dto.email,
            phone: dto.phone,
        })
        .await
    }

    /// Moves a user to the named status.
    ///
    /// The user takes on the role carried by the new status row.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to move
    /// - `status_name` - Name of the target status
    ///
    /// # Returns
    /// - `Ok(User)` - The user under the new status
    /// - `Err(AppError::BadRequest)` - Blank status name
    /// - `Err(AppError::NotFound)` - User or status missing
    pub async fn change_status(&self, user_id: i32, status_name: &str) -> Result<User, AppError> {
        if status_name.trim().is_empty() {
            return Err(AppError::BadRequest("Status name is required".to_string()));
        }

        let repo = UserRepository::new(self.db);
        if repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let status = self.require_status(status_name).await?;

        repo.set_status(user_id, status.status_id).await
    }

    /// Deletes a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        repo.delete(user_id).await
    }

    /// Resolves a status name to its row, failing with `NotFound` when no
    /// such status exists.
    async fn require_status(&self, name: &str) -> Result<entity::user_status::Model, AppError> {
        let status_repo = UserStatusRepository::new(self.db);

        status_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Status '{}' not found", name)))
    }
}
