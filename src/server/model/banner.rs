//! Promotional banner domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::banner::BannerDto;
use crate::server::error::{internal::InternalError, AppError};
use crate::server::util::datetime::{normalize, render_value};

/// Promotional banner shown on the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Unique identifier for the banner.
    pub banner_id: i32,
    /// Headline text.
    pub title: String,
    /// Longer marketing copy.
    pub description: Option<String>,
    /// Image to display.
    pub image_url: String,
    /// Where a click should lead.
    pub target_url: Option<String>,
    /// Promo code the banner advertises.
    pub discount_code: Option<String>,
    /// Discount percentage the code grants.
    pub discount_percentage: Option<f64>,
    /// Start of the display window.
    pub start_date: NaiveDateTime,
    /// End of the display window.
    pub end_date: NaiveDateTime,
    /// Whether the banner is enabled at all.
    pub is_active: bool,
    /// Sort key for the storefront carousel, ascending.
    pub display_order: i32,
    /// Number of recorded clicks.
    pub click_count: i32,
}

impl Banner {
    /// Converts an entity model to a banner domain model at the repository boundary.
    ///
    /// Both window bounds are NOT NULL columns, so blank text is an internal
    /// error rather than an open-ended window.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Banner)` - The converted banner domain model
    /// - `Err(AppError)` - When a stored window bound is blank or unparseable
    pub fn from_entity(entity: entity::promotional_banner::Model) -> Result<Self, AppError> {
        let start_date =
            normalize(Some(&entity.start_date))?.ok_or(InternalError::MissingTimestamp {
                entity: "promotional_banner",
                column: "start_date",
            })?;
        let end_date =
            normalize(Some(&entity.end_date))?.ok_or(InternalError::MissingTimestamp {
                entity: "promotional_banner",
                column: "end_date",
            })?;

        Ok(Self {
            banner_id: entity.banner_id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            target_url: entity.target_url,
            discount_code: entity.discount_code,
            discount_percentage: entity.discount_percentage,
            start_date,
            end_date,
            is_active: entity.is_active,
            display_order: entity.display_order,
            click_count: entity.click_count,
        })
    }

    /// Converts the banner domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `BannerDto` - The converted banner DTO
    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            banner_id: self.banner_id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            target_url: self.target_url,
            discount_code: self.discount_code,
            discount_percentage: self.discount_percentage,
            start_date: render_value(self.start_date),
            end_date: render_value(self.end_date),
            is_active: self.is_active,
            display_order: self.display_order,
            click_count: self.click_count,
        }
    }

    /// Reports whether the banner should be shown at the given instant.
    ///
    /// A banner is live when it is active and `now` falls inside its display
    /// window, bounds inclusive.
    ///
    /// # Arguments
    /// - `now` - The instant to check against the display window
    pub fn is_live_at(&self, now: NaiveDateTime) -> bool {
        self.is_active && self.start_date <= now && now <= self.end_date
    }
}

/// Parameters for creating a banner.
#[derive(Debug, Clone)]
pub struct CreateBannerParam {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    /// Start of the display window.
    pub start_date: NaiveDateTime,
    /// End of the display window.
    pub end_date: NaiveDateTime,
    pub is_active: bool,
    pub display_order: i32,
}

/// Parameters for updating an existing banner.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone)]
pub struct UpdateBannerParam {
    pub banner_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
