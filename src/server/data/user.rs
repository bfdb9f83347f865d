//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Every read joins the user's status row so callers get the status name and role
//! without extra queries, and the text `registration_date`/`last_login` columns are
//! normalized to `NaiveDateTime` at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::error::AppError;
use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};
use crate::server::util::datetime::render_value;

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users with their status rows.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by ID
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let rows = entity::prelude::User::find()
            .find_also_related(entity::prelude::UserStatus)
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        rows.into_iter().map(Self::to_user).collect()
    }

    /// Gets a user by ID with their status row.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let row = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::UserStatus)
            .one(self.db)
            .await?;

        row.map(Self::to_user).transpose()
    }

    /// Finds a user by email with their status row.
    ///
    /// Email is unique across users, so at most one row matches. Used to reject
    /// duplicate registrations before hitting the unique constraint.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError)` - Database error, or a stored timestamp failed to normalize
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .find_also_related(entity::prelude::UserStatus)
            .one(self.db)
            .await?;

        row.map(Self::to_user).transpose()
    }

    /// Creates a new user with the given status.
    ///
    /// The registration date is stamped with the current UTC time; `last_login`
    /// starts out empty.
    ///
    /// # Arguments
    /// - `param` - User creation parameters
    /// - `status_id` - ID of the already-resolved status row to assign
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with status name and role
    /// - `Err(AppError)` - Database error during insert or the re-fetch
    pub async fn create(&self, param: CreateUserParam, status_id: i32) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(param.user_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            registration_date: ActiveValue::Set(render_value(Utc::now().naive_utc())),
            last_login: ActiveValue::Set(None),
            status_id: ActiveValue::Set(status_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found after creation",
                entity.user_id
            )))
            .map_err(AppError::from)
    }

    /// Updates a user's profile, touching only the provided fields.
    ///
    /// # Arguments
    /// - `param` - User update parameters
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user with status name and role
    /// - `Err(AppError)` - User not found, or database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                param.user_id
            )))?;

        let mut active_model: entity::user::ActiveModel = entity.into();
        if let Some(user_name) = param.user_name {
            active_model.user_name = ActiveValue::Set(Some(user_name));
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }

        let updated = active_model.update(self.db).await?;

        self.get_by_id(updated.user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found after update",
                updated.user_id
            )))
            .map_err(AppError::from)
    }

    /// Moves a user to a different status.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to move
    /// - `status_id` - ID of the already-resolved status row to assign
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user with the new status name and role
    /// - `Err(AppError)` - User not found, or database error during update
    pub async fn set_status(&self, user_id: i32, status_id: i32) -> Result<User, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(
                entity::user::Column::StatusId,
                sea_orm::sea_query::Expr::value(status_id),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(
                DbErr::RecordNotFound(format!("User with id {} not found", user_id)).into(),
            );
        }

        self.get_by_id(user_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found after status change",
                user_id
            )))
            .map_err(AppError::from)
    }

    /// Deletes a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - Deleted, or no matching user existed
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all users.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users
    /// - `Err(AppError)` - Database error during count
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::User::find().count(self.db).await?;

        Ok(count)
    }

    /// Converts a joined row to a domain model.
    ///
    /// The status foreign key is NOT NULL with ON DELETE RESTRICT, so a missing
    /// status row is a broken reference rather than an expected state.
    fn to_user(
        row: (entity::user::Model, Option<entity::user_status::Model>),
    ) -> Result<User, AppError> {
        let (user, status) = row;
        let status = status.ok_or(DbErr::RecordNotFound(format!(
            "Status for user {} not found",
            user.user_id
        )))?;

        User::from_entity(user, status)
    }
}
