use sea_orm_migration::{prelude::*, schema::*};

use super::m20250910_000004_create_cinema_hall_table::CinemaHall;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::SeatId))
                    .col(string(Seat::Row))
                    .col(integer(Seat::Number))
                    .col(string(Seat::Status))
                    .col(integer(Seat::HallId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_hall_id")
                            .from(Seat::Table, Seat::HallId)
                            .to(CinemaHall::Table, CinemaHall::HallId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    SeatId,
    Row,
    Number,
    Status,
    HallId,
}
