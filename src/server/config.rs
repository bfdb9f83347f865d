use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub seed_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let seed_on_startup = match std::env::var("SEED_ON_STARTUP") {
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "SEED_ON_STARTUP".to_string(),
                        value,
                    }
                    .into())
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            listen_addr,
            seed_on_startup,
        })
    }
}
