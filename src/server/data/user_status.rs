use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::error::AppError;

/// Repository for the user status lookup table.
///
/// Statuses are plain entity models since they carry no text timestamps and
/// need no domain conversion.
pub struct UserStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all statuses ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user_status::Model>, AppError> {
        let entities = entity::prelude::UserStatus::find()
            .order_by_asc(entity::user_status::Column::StatusId)
            .all(self.db)
            .await?;

        Ok(entities)
    }

    /// Finds a status by its unique name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::user_status::Model>, AppError> {
        let entity = entity::prelude::UserStatus::find()
            .filter(entity::user_status::Column::StatusName.eq(name))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Inserts a batch of statuses as (name, role) pairs
    pub async fn insert_many(&self, statuses: &[(&str, &str)]) -> Result<(), AppError> {
        if statuses.is_empty() {
            return Ok(());
        }

        let models = statuses
            .iter()
            .map(|(name, role)| entity::user_status::ActiveModel {
                status_name: ActiveValue::Set(name.to_string()),
                role: ActiveValue::Set(role.to_string()),
                ..Default::default()
            });

        entity::prelude::UserStatus::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all statuses
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::UserStatus::find()
            .count(self.db)
            .await?;

        Ok(count)
    }
}
