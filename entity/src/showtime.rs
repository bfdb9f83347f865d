use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "showtime")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub showtime_id: i32,
    pub start_time: String,
    pub end_time: Option<String>,
    pub price: f64,
    pub hall_id: i32,
    pub movie_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cinema_hall::Entity",
        from = "Column::HallId",
        to = "super::cinema_hall::Column::HallId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CinemaHall,
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::MovieId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Movie,
}

impl Related<super::cinema_hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CinemaHall.def()
    }
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
