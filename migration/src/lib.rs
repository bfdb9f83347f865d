pub use sea_orm_migration::prelude::*;

mod m20250910_000001_create_user_status_table;
mod m20250910_000002_create_user_table;
mod m20250910_000003_create_movie_table;
mod m20250910_000004_create_cinema_hall_table;
mod m20250910_000005_create_showtime_table;
mod m20250910_000006_create_seat_table;
mod m20250910_000007_create_promotional_banner_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250910_000001_create_user_status_table::Migration),
            Box::new(m20250910_000002_create_user_table::Migration),
            Box::new(m20250910_000003_create_movie_table::Migration),
            Box::new(m20250910_000004_create_cinema_hall_table::Migration),
            Box::new(m20250910_000005_create_showtime_table::Migration),
            Box::new(m20250910_000006_create_seat_table::Migration),
            Box::new(m20250910_000007_create_promotional_banner_table::Migration),
        ]
    }
}
