use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "promotional_banner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub banner_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: String,
    pub target_url: Option<String>,
    pub discount_code: Option<String>,
    pub discount_percentage: Option<f64>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub display_order: i32,
    pub click_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
