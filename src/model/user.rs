use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub user_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    /// Canonical timestamp text, e.g. "2025-09-01T12:00:00"
    pub registration_date: String,
    pub last_login: Option<String>,
    pub status_name: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub user_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    /// Status name, defaults to "Active" when omitted
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateUserStatusDto {
    pub status: String,
}
