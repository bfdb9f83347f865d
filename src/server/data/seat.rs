use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::error::AppError;
use crate::server::model::seat::{Seat, SeatPosition, SeatStatus};

pub struct SeatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all seats in a hall, ordered by row then number
    pub async fn get_by_hall(&self, hall_id: i32) -> Result<Vec<Seat>, AppError> {
        let entities = entity::prelude::Seat::find()
            .filter(entity::seat::Column::HallId.eq(hall_id))
            .order_by_asc(entity::seat::Column::Row)
            .order_by_asc(entity::seat::Column::Number)
            .all(self.db)
            .await?;

        entities.into_iter().map(Seat::from_entity).collect()
    }

    /// Gets seats in a hall holding the given status, ordered by row then number
    pub async fn get_by_hall_and_status(
        &self,
        hall_id: i32,
        status: SeatStatus,
    ) -> Result<Vec<Seat>, AppError> {
        let entities = entity::prelude::Seat::find()
            .filter(entity::seat::Column::HallId.eq(hall_id))
            .filter(entity::seat::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::seat::Column::Row)
            .order_by_asc(entity::seat::Column::Number)
            .all(self.db)
            .await?;

        entities.into_iter().map(Seat::from_entity).collect()
    }

    /// Gets a seat by ID
    pub async fn get_by_id(&self, seat_id: i32) -> Result<Option<Seat>, AppError> {
        let entity = entity::prelude::Seat::find_by_id(seat_id)
            .one(self.db)
            .await?;

        entity.map(Seat::from_entity).transpose()
    }

    /// Inserts a batch of available seats into a hall
    pub async fn insert_many(
        &self,
        hall_id: i32,
        positions: Vec<SeatPosition>,
    ) -> Result<(), AppError> {
        if positions.is_empty() {
            return Ok(());
        }

        let models = positions
            .into_iter()
            .map(|position| entity::seat::ActiveModel {
                row: ActiveValue::Set(position.row),
                number: ActiveValue::Set(position.number),
                status: ActiveValue::Set(SeatStatus::Available.as_str().to_string()),
                hall_id: ActiveValue::Set(hall_id),
                ..Default::default()
            });

        entity::prelude::Seat::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets a seat's status and returns the updated seat
    pub async fn set_status(&self, seat_id: i32, status: SeatStatus) -> Result<Seat, AppError> {
        let entity = entity::prelude::Seat::find_by_id(seat_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Seat with id {} not found",
                seat_id
            )))?;

        let mut active_model: entity::seat::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active_model.update(self.db).await?;

        Seat::from_entity(updated)
    }
}
