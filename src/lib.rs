pub mod app_config;
pub mod error;
pub mod logger;
pub mod vars;

pub use app_config::{parse_write_flag, AppConfig, StorageBackend};
pub use error::ConfigError;
