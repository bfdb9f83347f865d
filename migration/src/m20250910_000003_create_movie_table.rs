use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::MovieId))
                    .col(string(Movie::Title))
                    .col(text_null(Movie::Description))
                    .col(integer_null(Movie::ReleaseYear))
                    .col(string_null(Movie::Genre))
                    .col(integer_null(Movie::Duration))
                    .col(string_null(Movie::Language))
                    .col(string_null(Movie::Director))
                    .col(string_null(Movie::PosterUrl))
                    .col(boolean(Movie::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movie::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    Table,
    MovieId,
    Title,
    Description,
    ReleaseYear,
    Genre,
    Duration,
    Language,
    Director,
    PosterUrl,
    IsActive,
}
