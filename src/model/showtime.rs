use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShowTimeDto {
    pub showtime_id: i32,
    pub movie_id: i32,
    pub movie_title: String,
    pub hall_id: i32,
    pub hall_name: String,
    /// Canonical timestamp text, e.g. "2025-09-18T18:00:00"
    pub start_time: String,
    pub end_time: Option<String>,
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateShowTimeDto {
    pub movie_id: i32,
    pub hall_id: i32,
    /// Accepts any supported timestamp layout, e.g. "2025-09-18 18:00"
    pub start_time: String,
    pub end_time: Option<String>,
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateShowTimeDto {
    pub movie_id: Option<i32>,
    pub hall_id: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub price: Option<f64>,
}
