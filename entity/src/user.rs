use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub user_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub registration_date: String,
    pub last_login: Option<String>,
    pub status_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_status::Entity",
        from = "Column::StatusId",
        to = "super::user_status::Column::StatusId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    UserStatus,
}

impl Related<super::user_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
