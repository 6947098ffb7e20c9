mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".coderelic";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

const DEFAULT_DATABASE_FILENAME: &str = "coderelic.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
