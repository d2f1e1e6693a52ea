use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    /// Sweep cadence; production runs once daily, demo setups can drop
    /// this to a minute.
    pub sweep_interval_secs: u64,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            database_url: try_load("DATABASE_URL", "sqlite:tuition.db?mode=rwc"),
            jwt_secret: try_load("JWT_SECRET", "tuition-dev-secret"),
            sweep_interval_secs: try_load("SWEEP_INTERVAL_SECS", "86400"),
            admin_username: try_load("ADMIN_USERNAME", "admin"),
            admin_password: try_load("ADMIN_PASSWORD", "admin123"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
