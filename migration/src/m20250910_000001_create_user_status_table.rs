use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(UserStatus::StatusId))
                    .col(string_uniq(UserStatus::StatusName))
                    .col(string(UserStatus::Role))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserStatus {
    Table,
    StatusId,
    StatusName,
    Role,
}
