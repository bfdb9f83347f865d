use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MovieDto {
    pub movie_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMovieDto {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMovieDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShowtimeCountDto {
    pub movie_id: i32,
    pub count: u64,
}
