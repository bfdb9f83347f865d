//! Promotional banner service for storefront and admin surfaces.
//!
//! This module provides the `BannerService`. The public listing only shows
//! banners whose display window covers the current instant, and it degrades
//! to an empty list if the lookup fails so a banner problem never takes the
//! storefront down with it. Click tracking is likewise fire-and-forget.

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::model::banner::{CreateBannerDto, UpdateBannerDto};
use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{Banner, CreateBannerParam, UpdateBannerParam},
    util::datetime::normalize,
};

/// Length of the display window applied when a creation request has no end
/// date.
const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Service providing business logic for promotional banners.
///
/// This struct holds a reference to the database connection and provides
/// methods for the live storefront listing, admin CRUD, and click tracking.
pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    /// Creates a new BannerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BannerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the banners currently live on the storefront.
    ///
    /// A banner is live when it is enabled and the current instant falls
    /// inside its display window. Lookup failures are logged and reported as
    /// an empty listing.
    ///
    /// # Returns
    /// - `Ok(Vec<Banner>)` - Live banners in display order, possibly empty
    pub async fn get_active(&self) -> Result<Vec<Banner>, AppError> {
        let repo = BannerRepository::new(self.db);

        let banners = match repo.get_active().await {
            Ok(banners) => banners,
            Err(err) => {
                tracing::error!("Failed to load active banners: {}", err);
                return Ok(Vec::new());
            }
        };

        let now = Utc::now().naive_utc();
        Ok(banners
            .into_iter()
            .filter(|banner| banner.is_live_at(now))
            .collect())
    }

    /// Retrieves every banner for the admin surface.
    pub async fn get_all(&self) -> Result<Vec<Banner>, AppError> {
        let repo = BannerRepository::new(self.db);
        repo.get_all().await
    }

    /// Retrieves a single banner.
    ///
    /// # Arguments
    /// - `banner_id` - ID of the banner to look up
    ///
    /// # Returns
    /// - `Ok(Banner)` - The banner
    /// - `Err(AppError::NotFound)` - No banner with that ID
    pub async fn get_by_id(&self, banner_id: i32) -> Result<Banner, AppError> {
        let repo = BannerRepository::new(self.db);

        repo.get_by_id(banner_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Banner with id {} not found", banner_id))
        })
    }

    /// Creates a banner from an admin request.
    ///
    /// The display window defaults to a thirty-day run starting now, and the
    /// banner starts enabled unless the request says otherwise.
    ///
    /// # Arguments
    /// - `dto` - The creation request body
    ///
    /// # Returns
    /// - `Ok(Banner)` - The created banner
    /// - `Err(AppError::BadRequest)` - A window bound failed to normalize
    pub async fn create(&self, dto: CreateBannerDto) -> Result<Banner, AppError> {
        let start_date = Self::parse_optional_date("start date", dto.start_date.as_deref())?;
        let end_date = Self::parse_optional_date("end date", dto.end_date.as_deref())?;

        let now = Utc::now().naive_utc();
        let start_date = start_date.unwrap_or(now);
        let end_date = end_date.unwrap_or(now + Duration::days(DEFAULT_WINDOW_DAYS));

        let repo = BannerRepository::new(self.db);
        repo.create(CreateBannerParam {
            title: dto.title,
            description: dto.description,
            image_url: dto.image_url,
            target_url: dto.target_url,
            discount_code: dto.discount_code,
            discount_percentage: dto.discount_percentage,
            start_date,
            end_date,
            is_active: dto.is_active.unwrap_or(true),
            display_order: dto.display_order.unwrap_or(0),
        })
        .await
    }

    /// Updates a banner from an admin request, touching only provided fields.
    ///
    /// # Arguments
    /// - `banner_id` - ID of the banner to update
    /// - `dto` - The update request body
    ///
    /// # Returns
    /// - `Ok(Banner)` - The updated banner
    /// - `Err(AppError::NotFound)` - No banner with that ID
    /// - `Err(AppError::BadRequest)` - A window bound failed to normalize
    pub async fn update(&self, banner_id: i32, dto: UpdateBannerDto) -> Result<Banner, AppError> {
        let repo = BannerRepository::new(self.db);

        if repo.get_by_id(banner_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Banner with id {} not found",
                banner_id
            )));
        }

        let start_date = Self::parse_optional_date("start date", dto.start_date.as_deref())?;
        let end_date = Self::parse_optional_date("end date", dto.end_date.as_deref())?;

        repo.update(UpdateBannerParam {
            banner_id,
            title: dto.title,
            description: dto.description,
            image_url: dto.image_url,
            target_url: dto.target_url,
            discount_code: dto.discount_code,
            discount_percentage: dto.discount_percentage,
            start_date,
            end_date,
            is_active: dto.is_active,
            display_order: dto.display_order,
        })
        .await
    }

    /// Deletes a banner.
    ///
    /// # Arguments
    /// - `banner_id` - ID of the banner to delete
    ///
    /// # Returns
    /// - `Ok(())` - Banner deleted
    /// - `Err(AppError::NotFound)` - No banner with that ID
    pub async fn delete(&self, banner_id: i32) -> Result<(), AppError> {
        let repo = BannerRepository::new(self.db);

        if repo.get_by_id(banner_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Banner with id {} not found",
                banner_id
            )));
        }

        repo.delete(banner_id).await
    }

    /// Records a click on a banner.
    ///
    /// Tracking is best-effort: failures, including clicks on banners that no
    /// longer exist, are logged and swallowed so the redirect is never held
    /// up.
    ///
    /// # Arguments
    /// - `banner_id` - ID of the clicked banner
    pub async fn track_click(&self, banner_id: i32) -> Result<(), AppError> {
        let repo = BannerRepository::new(self.db);

        match repo.increment_click_count(banner_id).await {
            Ok(banner) => {
                tracing::debug!(
                    "Recorded click on banner {} (total {})",
                    banner_id,
                    banner.click_count
                );
            }
            Err(err) => {
                tracing::warn!("Failed to record click on banner {}: {}", banner_id, err);
            }
        }

        Ok(())
    }

    /// Normalizes optional request date text.
    ///
    /// Absent and blank text both mean the field was not provided.
    fn parse_optional_date(
        field: &str,
        raw: Option<&str>,
    ) -> Result<Option<NaiveDateTime>, AppError> {
        match raw {
            Some(raw) => normalize(Some(raw)).map_err(|err| {
                AppError::BadRequest(format!("Invalid {} '{}': {}", field, raw, err))
            }),
            None => Ok(None),
        }
    }
}
