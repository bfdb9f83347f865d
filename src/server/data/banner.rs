use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder,
};

use crate::server::error::AppError;
use crate::server::model::banner::{Banner, CreateBannerParam, UpdateBannerParam};
use crate::server::util::datetime::render_value;

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all banners ordered by display order, then ID for stable ties
    pub async fn get_all(&self) -> Result<Vec<Banner>, AppError> {
        let entities = entity::prelude::PromotionalBanner::find()
            .order_by_asc(entity::promotional_banner::Column::DisplayOrder)
            .order_by_asc(entity::promotional_banner::Column::BannerId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Banner::from_entity).collect()
    }

    /// Gets banners flagged active, ordered by display order.
    ///
    /// The display window is not checked here; callers filter by window against
    /// their own clock.
    pub async fn get_active(&self) -> Result<Vec<Banner>, AppError> {
        let entities = entity::prelude::PromotionalBanner::find()
            .filter(entity::promotional_banner::Column::IsActive.eq(true))
            .order_by_asc(entity::promotional_banner::Column::DisplayOrder)
            .order_by_asc(entity::promotional_banner::Column::BannerId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Banner::from_entity).collect()
    }

    /// Gets a banner by ID
    pub async fn get_by_id(&self, banner_id: i32) -> Result<Option<Banner>, AppError> {
        let entity = entity::prelude::PromotionalBanner::find_by_id(banner_id)
            .one(self.db)
            .await?;

        entity.map(Banner::from_entity).transpose()
    }

    /// Creates a new banner
    pub async fn create(&self, param: CreateBannerParam) -> Result<Banner, AppError> {
        let entity = entity::promotional_banner::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            target_url: ActiveValue::Set(param.target_url),
            discount_code: ActiveValue::Set(param.discount_code),
            discount_percentage: ActiveValue::Set(param.discount_percentage),
            start_date: ActiveValue::Set(render_value(param.start_date)),
            end_date: ActiveValue::Set(render_value(param.end_date)),
            is_active: ActiveValue::Set(param.is_active),
            display_order: ActiveValue::Set(param.display_order),
            click_count: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Banner::from_entity(entity)
    }

    /// Updates a banner, touching only the provided fields
    pub async fn update(&self, param: UpdateBannerParam) -> Result<Banner, AppError> {
        let entity = entity::prelude::PromotionalBanner::find_by_id(param.banner_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Banner with id {} not found",
                param.banner_id
            )))?;

        let mut active_model: entity::promotional_banner::ActiveModel = entity.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(image_url) = param.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(target_url) = param.target_url {
            active_model.target_url = ActiveValue::Set(Some(target_url));
        }
        if let Some(discount_code) = param.discount_code {
            active_model.discount_code = ActiveValue::Set(Some(discount_code));
        }
        if let Some(discount_percentage) = param.discount_percentage {
            active_model.discount_percentage = ActiveValue::Set(Some(discount_percentage));
        }
        if let Some(start_date) = param.start_date {
            active_model.start_date = ActiveValue::Set(render_value(start_date));
        }
        if let Some(end_date) = param.end_date {
            active_model.end_date = ActiveValue::Set(render_value(end_date));
        }
        if let Some(is_active) = param.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(display_order) = param.display_order {
            active_model.display_order = ActiveValue::Set(display_order);
        }

        let updated = active_model.update(self.db).await?;

        Banner::from_entity(updated)
    }

    /// Deletes a banner permanently
    pub async fn delete(&self, banner_id: i32) -> Result<(), AppError> {
        entity::prelude::PromotionalBanner::delete_by_id(banner_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Atomically bumps a banner's click count and returns the updated banner
    pub async fn increment_click_count(&self, banner_id: i32) -> Result<Banner, AppError> {
        let result = entity::prelude::PromotionalBanner::update_many()
            .filter(entity::promotional_banner::Column::BannerId.eq(banner_id))
            .col_expr(
                entity::promotional_banner::Column::ClickCount,
                sea_orm::sea_query::Expr::col(entity::promotional_banner::Column::ClickCount)
                    .add(1),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Banner with id {} not found",
                banner_id
            ))
            .into());
        }

        self.get_by_id(banner_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Banner with id {} not found after click",
                banner_id
            )))
            .map_err(AppError::from)
    }
}
