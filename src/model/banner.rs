use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BannerDto {
    pub banner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    /// Canonical timestamp text, e.g. "2025-09-01T00:00:00"
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub display_order: i32,
    pub click_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBannerDto {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    /// Defaults to now when omitted
    pub start_date: Option<String>,
    /// Defaults to thirty days from now when omitted
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBannerDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
