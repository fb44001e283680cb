//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line overrides for [`super::AppConfig`].
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    version,
    about = "A single-product terminal storefront",
    long_about = None
)]
/// Command line flags. Each one overrides its config file value.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Premium customer (free shipping).
    #[arg(long)]
    pub premium: Option<bool>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Flat shipping fee in cents.
    #[arg(long, value_name = "CENTS")]
    pub shipping_fee_cents: Option<u32>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
