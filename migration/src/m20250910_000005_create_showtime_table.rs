use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250910_000003_create_movie_table::Movie,
    m20250910_000004_create_cinema_hall_table::CinemaHall,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showtime::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtime::ShowtimeId))
                    // Mixed-format legacy text, not a SQL timestamp.
                    .col(string(Showtime::StartTime))
                    .col(string_null(Showtime::EndTime))
                    .col(double(Showtime::Price))
                    .col(integer(Showtime::HallId))
                    .col(integer(Showtime::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_hall_id")
                            .from(Showtime::Table, Showtime::HallId)
                            .to(CinemaHall::Table, CinemaHall::HallId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_movie_id")
                            .from(Showtime::Table, Showtime::MovieId)
                            .to(Movie::Table, Movie::MovieId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Showtime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Showtime {
    Table,
    ShowtimeId,
    StartTime,
    EndTime,
    Price,
    HallId,
    MovieId,
}
