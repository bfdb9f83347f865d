use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::error::AppError;
use crate::server::model::hall::{CinemaHall, CreateCinemaHallParam, UpdateCinemaHallParam};

pub struct CinemaHallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CinemaHallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all halls ordered by name
    pub async fn get_all(&self) -> Result<Vec<CinemaHall>, AppError> {
        let entities = entity::prelude::CinemaHall::find()
            .order_by_asc(entity::cinema_hall::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CinemaHall::from_entity).collect())
    }

    /// Gets a hall by ID
    pub async fn get_by_id(&self, hall_id: i32) -> Result<Option<CinemaHall>, AppError> {
        let entity = entity::prelude::CinemaHall::find_by_id(hall_id)
            .one(self.db)
            .await?;

        Ok(entity.map(CinemaHall::from_entity))
    }

    /// Creates a new hall, without seats
    pub async fn create(&self, param: CreateCinemaHallParam) -> Result<CinemaHall, AppError> {
        let entity = entity::cinema_hall::ActiveModel {
            name: ActiveValue::Set(param.name),
            location: ActiveValue::Set(param.location),
            capacity: ActiveValue::Set(param.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CinemaHall::from_entity(entity))
    }

    /// Updates a hall, touching only the provided fields
    pub async fn update(&self, param: UpdateCinemaHallParam) -> Result<CinemaHall, AppError> {
        let entity = entity::prelude::CinemaHall::find_by_id(param.hall_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Cinema hall with id {} not found",
                param.hall_id
            )))?;

        let mut active_model: entity::cinema_hall::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(Some(location));
        }
        if let Some(capacity) = param.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }

        let updated = active_model.update(self.db).await?;

        Ok(CinemaHall::from_entity(updated))
    }

    /// Deletes a hall along with its seats and showtimes via cascade
    pub async fn delete(&self, hall_id: i32) -> Result<(), AppError> {
        entity::prelude::CinemaHall::delete_by_id(hall_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all halls
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::CinemaHall::find().count(self.db).await?;

        Ok(count)
    }
}
