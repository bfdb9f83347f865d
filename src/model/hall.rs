use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CinemaHallDto {
    pub hall_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCinemaHallDto {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCinemaHallDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}
