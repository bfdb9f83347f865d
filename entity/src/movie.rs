use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub movie_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub duration: Option<i32>,
    pub language: Option<String>,
    pub director: Option<String>,
    pub poster_url: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::showtime::Entity")]
    Showtime,
}

impl Related<super::showtime::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showtime.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
