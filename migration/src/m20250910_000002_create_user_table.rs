use sea_orm_migration::{prelude::*, schema::*};

use super::m20250910_000001_create_user_status_table::UserStatus;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(string_null(User::UserName))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Phone))
                    // Timestamps are TEXT on purpose; see server/util/datetime.rs.
                    .col(string(User::RegistrationDate))
                    .col(string_null(User::LastLogin))
                    .col(integer(User::StatusId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_status_id")
                            .from(User::Table, User::StatusId)
                            .to(UserStatus::Table, UserStatus::StatusId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    UserId,
    UserName,
    Email,
    Phone,
    RegistrationDate,
    LastLogin,
    StatusId,
}
