//! Startup seeding for demo catalog data.
//!
//! This module populates an empty database with the demo catalog: user
//! statuses, two demo accounts, a handful of movies, two halls with their
//! seat banks, and a screening schedule. Every stage checks for existing
//! rows first, so running the seed against a populated database changes
//! nothing. Seeded timestamps are rendered to the canonical text layout
//! before they are stored.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::model::{
    hall::CreateCinemaHallDto, movie::CreateMovieDto, showtime::CreateShowTimeDto,
};
use crate::server::{
    data::{
        hall::CinemaHallRepository, movie::MovieRepository, showtime::ShowTimeRepository,
        user::UserRepository, user_status::UserStatusRepository,
    },
    error::AppError,
    model::user::CreateUserParam,
    service::{hall::CinemaHallService, movie::MovieService, showtime::ShowTimeService},
    util::datetime::render_value,
};

/// Statuses every deployment starts with, as `(name, role)` pairs.
const STATUSES: [(&str, &str); 4] = [
    ("Active", "user"),
    ("Admin", "admin"),
    ("Suspended", "user"),
    ("Inactive", "user"),
];

const ADMIN_EMAIL: &str = "admin@example.com";
const USER_EMAIL: &str = "user@example.com";

/// Seeds the demo catalog into an empty database.
///
/// Stages run in dependency order: statuses, demo users, movies, halls with
/// their showtimes and seats, and finally a fallback screening schedule for
/// databases that already had halls but no showtimes. Each stage is skipped
/// when its rows already exist.
///
/// # Arguments
/// - `db` - Reference to the database connection
///
/// # Returns
/// - `Ok(())` - Seeding finished, whether or not anything was inserted
/// - `Err(AppError)` - Database error during one of the stages
pub async fn run(db: &DatabaseConnection) -> Result<(), AppError> {
    seed_statuses(db).await?;
    seed_demo_users(db).await?;
    seed_movies(db).await?;
    seed_halls_and_showtimes(db).await?;
    seed_fallback_showtimes(db).await?;

    Ok(())
}

/// Inserts the standard status rows when none exist.
async fn seed_statuses(db: &DatabaseConnection) -> Result<(), AppError> {
    let status_repo = UserStatusRepository::new(db);

    if status_repo.count().await? > 0 {
        return Ok(());
    }

    status_repo.insert_many(&STATUSES).await?;
    tracing::info!("Seeded {} user statuses", STATUSES.len());

    Ok(())
}

/// Inserts the demo admin and user accounts when the admin is absent.
async fn seed_demo_users(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.find_by_email(ADMIN_EMAIL).await?.is_some() {
        return Ok(());
    }

    let status_repo = UserStatusRepository::new(db);
    let Some(admin_status) = status_repo.find_by_name("Admin").await? else {
        tracing::warn!("Skipping demo users: status 'Admin' is missing");
        return Ok(());
    };
    let Some(active_status) = status_repo.find_by_name("Active").await? else {
        tracing::warn!("Skipping demo users: status 'Active' is missing");
        return Ok(());
    };

    user_repo
        .create(
            CreateUserParam {
                user_name: Some("Admin".to_string()),
                email: ADMIN_EMAIL.to_string(),
                phone: None,
            },
            admin_status.status_id,
        )
        .await?;
    user_repo
        .create(
            CreateUserParam {
                user_name: Some("User".to_string()),
                email: USER_EMAIL.to_string(),
                phone: None,
            },
            active_status.status_id,
        )
        .await?;

    tracing::info!("Seeded demo accounts {} and {}", ADMIN_EMAIL, USER_EMAIL);

    Ok(())
}

/// Inserts the demo movie catalog when no movies exist.
///
/// Movies go through the movie service so the usual field defaulting
/// applies.
async fn seed_movies(db: &DatabaseConnection) -> Result<(), AppError> {
    let movie_repo = MovieRepository::new(db);

    if movie_repo.count().await? > 0 {
        return Ok(());
    }

    let movies = [
        ("Inception", "A mind-bending heist movie", 2010, 148),
        ("The Matrix", "A sci-fi classic", 1999, 136),
        ("Dune", "A sci-fi epic", 2021, 155),
        ("Interstellar", "A space exploration adventure", 2014, 169),
        ("Blade Runner 2049", "A neo-noir sci-fi thriller", 2017, 164),
    ];

    let movie_service = MovieService::new(db);
    for (title, description, release_year, duration) in movies {
        movie_service
            .create(CreateMovieDto {
                title: title.to_string(),
                description: Some(description.to_string()),
                release_year: Some(release_year),
                genre: Some("Sci-Fi".to_string()),
                duration: Some(duration),
                language: None,
                director: None,
                poster_url: None,
            })
            .await?;
    }

    tracing::info!("Seeded {} movies", movies.len());

    Ok(())
}

/// Inserts the demo halls, their seat banks, and an opening schedule when no
/// halls exist.
async fn seed_halls_and_showtimes(db: &DatabaseConnection) -> Result<(), AppError> {
    let hall_repo = CinemaHallRepository::new(db);

    if hall_repo.count().await? > 0 {
        return Ok(());
    }

    let hall_service = CinemaHallService::new(db);
    let hall_one = hall_service
        .create(CreateCinemaHallDto {
            name: "Hall 1".to_string(),
            location: Some("Main Cinema Complex".to_string()),
            capacity: 50,
        })
        .await?;
    let hall_two = hall_service
        .create(CreateCinemaHallDto {
            name: "Hall 2".to_string(),
            location: Some("Main Cinema Complex".to_string()),
            capacity: 30,
        })
        .await?;

    tracing::info!("Seeded halls '{}' and '{}'", hall_one.name, hall_two.name);

    let movie_repo = MovieRepository::new(db);
    let movies = movie_repo.get_all().await?;
    if movies.len() < 2 {
        tracing::warn!("Skipping opening schedule: fewer than two movies available");
        return Ok(());
    }

    let screenings = [
        (
            hall_one.hall_id,
            movies[0].movie_id,
            seed_time(2025, 9, 18, 18, 0)?,
            seed_time(2025, 9, 18, 20, 30)?,
            12.5,
        ),
        (
            hall_one.hall_id,
            movies[1].movie_id,
            seed_time(2025, 9, 18, 21, 0)?,
            seed_time(2025, 9, 18, 23, 30)?,
            12.5,
        ),
        (
            hall_two.hall_id,
            movies[0].movie_id,
            seed_time(2025, 9, 19, 14, 0)?,
            seed_time(2025, 9, 19, 16, 30)?,
            10.0,
        ),
    ];

    let showtime_service = ShowTimeService::new(db);
    for (hall_id, movie_id, start, end, price) in screenings {
        showtime_service
            .create(CreateShowTimeDto {
                movie_id,
                hall_id,
                start_time: render_value(start),
                end_time: Some(render_value(end)),
                price,
            })
            .await?;
    }

    tracing::info!("Seeded {} showtimes", screenings.len());

    Ok(())
}

/// Inserts a minimal screening schedule when halls exist but no showtimes do.
///
/// This covers databases seeded by older builds that created halls without a
/// schedule.
async fn seed_fallback_showtimes(db: &DatabaseConnection) -> Result<(), AppError> {
    let showtime_repo = ShowTimeRepository::new(db);

    if showtime_repo.count().await? > 0 {
        return Ok(());
    }

    let movies = MovieRepository::new(db).get_all().await?;
    let halls = CinemaHallRepository::new(db).get_all().await?;

    let (Some(primary_movie), Some(primary_hall)) = (movies.first(), halls.first()) else {
        tracing::warn!("Skipping fallback schedule: no movies or halls available");
        return Ok(());
    };
    let secondary_movie = movies.get(1).unwrap_or(primary_movie);
    let secondary_hall = halls.get(1).unwrap_or(primary_hall);

    let base = seed_time(2025, 9, 18, 18, 0)?;
    let screenings = [
        (
            primary_hall.hall_id,
            primary_movie.movie_id,
            base,
            base + Duration::hours(2),
            12.5,
        ),
        (
            primary_hall.hall_id,
            secondary_movie.movie_id,
            base + Duration::hours(3),
            base + Duration::hours(5),
            14.0,
        ),
        (
            secondary_hall.hall_id,
            primary_movie.movie_id,
            base + Duration::days(1),
            base + Duration::days(1) + Duration::hours(2),
            10.0,
        ),
    ];

    let showtime_service = ShowTimeService::new(db);
    for (hall_id, movie_id, start, end, price) in screenings {
        showtime_service
            .create(CreateShowTimeDto {
                movie_id,
                hall_id,
                start_time: render_value(start),
                end_time: Some(render_value(end)),
                price,
            })
            .await?;
    }

    tracing::info!("Seeded {} fallback showtimes", screenings.len());

    Ok(())
}

/// Builds a seed timestamp from literal parts.
fn seed_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Invalid seed timestamp {:04}-{:02}-{:02} {:02}:{:02}",
                year, month, day, hour, minute
            ))
        })
}
