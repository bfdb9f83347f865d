use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds a value that cannot be used.
    ///
    /// Covers values like an unparseable `LISTEN_ADDR` socket address or a
    /// `SEED_ON_STARTUP` flag that is neither true nor false.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The environment variable name
        name: String,
        /// The rejected value
        value: String,
    },
}
