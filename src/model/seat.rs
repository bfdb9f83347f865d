use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeatDto {
    pub seat_id: i32,
    pub row: String,
    pub number: i32,
    /// "AVAILABLE" or "RESERVED"
    pub status: String,
    pub hall_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateSeatStatusDto {
    pub status: String,
}
