use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, so tests don't touch the process
    /// environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port_value = require("PORT")?;
        let port = port_value
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: port_value.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            port,
            database_url: require("DATABASE_URL")?,
        })
    }
}
