mod model;
mod server;

use crate::server::{config::Config, error::AppError, seed, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if config.seed_on_startup {
        seed::run(&db).await?;
    }

    let router = server::router::router().with_state(AppState::new(db));

    tracing::info!("Listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
