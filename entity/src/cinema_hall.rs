use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cinema_hall")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hall_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat::Entity")]
    Seat,
    #[sea_orm(has_many = "super::showtime::Entity")]
    Showtime,
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seat.def()
    }
}

impl Related<super::showtime::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showtime.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
