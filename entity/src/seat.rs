use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "seat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seat_id: i32,
    pub row: String,
    pub number: i32,
    pub status: String,
    pub hall_id: i32,
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
}

impl Related<super::cinema_hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CinemaHall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
