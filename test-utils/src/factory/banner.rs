//! Promotional banner factory for creating test banner entities.
//!
//! The default display window is deliberately wide so factory-built banners
//! count as live no matter when the test runs. Tests that care about window
//! edges override `start_date` and `end_date` with raw text.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test banners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::banner::BannerFactory;
///
/// let banner = BannerFactory::new(&db)
///     .title("Autumn special")
///     .start_date("2025-09-01 00:00")
///     .end_date("2025-09-30 23:59")
///     .display_order(2)
///     .build()
///     .await?;
/// ```
pub struct BannerFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    image_url: String,
    target_url: Option<String>,
    discount_code: Option<String>,
    discount_percentage: Option<f64>,
    start_date: String,
    end_date: String,
    is_active: bool,
    display_order: i32,
    click_count: i32,
}

impl<'a> BannerFactory<'a> {
    /// Creates a new BannerFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Banner {id}"` where id is auto-incremented
    /// - image_url: `"https://cdn.example.com/banner{id}.png"`
    /// - start_date: `"2020-01-01T00:00:00"`
    /// - end_date: `"2099-12-31T23:59:59"`
    /// - is_active: `true`
    /// - display_order: `0`
    /// - click_count: `0`
    /// - everything else: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Banner {}", id),
            description: None,
            image_url: format!("https://cdn.example.com/banner{}.png", id),
            target_url: None,
            discount_code: None,
            discount_percentage: None,
            start_date: "2020-01-01T00:00:00".to_string(),
            end_date: "2099-12-31T23:59:59".to_string(),
            is_active: true,
            display_order: 0,
            click_count: 0,
        }
    }

    /// Sets the title for the banner.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description for the banner.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the discount code for the banner.
    pub fn discount_code(mut self, discount_code: impl Into<String>) -> Self {
        self.discount_code = Some(discount_code.into());
        self
    }

    /// Sets the discount percentage for the banner.
    pub fn discount_percentage(mut self, discount_percentage: f64) -> Self {
        self.discount_percentage = Some(discount_percentage);
        self
    }

    /// Sets the raw start date text for the banner.
    pub fn start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = start_date.into();
        self
    }

    /// Sets the raw end date text for the banner.
    pub fn end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = end_date.into();
        self
    }

    /// Sets the active flag for the banner.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the display order for the banner.
    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Sets the click count for the banner.
    pub fn click_count(mut self, click_count: i32) -> Self {
        self.click_count = click_count;
        self
    }

    /// Builds and inserts the banner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::promotional_banner::Model)` - Created banner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::promotional_banner::Model, DbErr> {
        entity::promotional_banner::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            target_url: ActiveValue::Set(self.target_url),
            discount_code: ActiveValue::Set(self.discount_code),
            discount_percentage: ActiveValue::Set(self.discount_percentage),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            is_active: ActiveValue::Set(self.is_active),
            display_order: ActiveValue::Set(self.display_order),
            click_count: ActiveValue::Set(self.click_count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a banner with default values.
///
/// Shorthand for `BannerFactory::new(db).build().await`.
pub async fn create_banner(
    db: &DatabaseConnection,
) -> Result<entity::promotional_banner::Model, DbErr> {
    BannerFactory::new(db).build().await
}
