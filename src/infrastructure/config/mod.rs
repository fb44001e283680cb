//! Application configuration.

/// Configuration model.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Config file storage.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
