//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::entities::{Price, Product};

pub(crate) const APP_NAME: &str = "storefront";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "storefront";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Premium customers get free shipping.
    #[serde(default = "default_true")]
    pub premium: bool,

    /// Enable mouse support (hover a swatch to select it).
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Flat shipping fee in cents for non-premium customers.
    #[serde(default = "default_shipping_fee_cents")]
    pub shipping_fee_cents: u32,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Product on display.
    #[serde(default)]
    pub product: Product,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_true() -> bool {
    true
}

fn default_shipping_fee_cents() -> u32 {
    299
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(premium) = args.premium {
            self.premium = premium;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(fee) = args.shipping_fee_cents {
            self.shipping_fee_cents = fee;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns the shipping fee as a price.
    #[must_use]
    pub const fn shipping_fee(&self) -> Price {
        Price::from_cents(self.shipping_fee_cents)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("storefront.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            premium: true,
            mouse: true,
            shipping_fee_cents: default_shipping_fee_cents(),
            theme: ThemeConfig::default(),
            product: Product::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.premium);
        assert!(config.mouse);
        assert_eq!(config.shipping_fee().to_string(), "2.99");
        assert_eq!(config.theme.accent_color, "Yellow");
        assert_eq!(config.product.name(), "Boots");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            premium = false
            log_level = "debug"

            [theme]
            accent_color = "#ff8800"
            "##,
        )
        .unwrap();

        assert!(!config.premium);
        assert!(config.mouse);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.shipping_fee_cents, 299);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.product.variants().len(), 2);
    }

    #[test]
    fn test_custom_product_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [product]
            brand = "Acme"
            name = "Socks"
            sizes = [1, 2]

            [[product.variants]]
            id = 9
            color = "red"
            image_path = "socks.png"
            stock_quantity = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.product.brand(), "Acme");
        assert_eq!(config.product.sizes(), &[1, 2]);
        assert_eq!(config.product.variants().len(), 1);
    }

    #[test]
    fn test_merge_with_args_overrides() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "storefront",
            "--premium",
            "false",
            "--shipping-fee-cents",
            "450",
            "--log-level",
            "warn",
            "--accent-color",
            "Cyan",
        ]);

        config.merge_with_args(args);

        assert!(!config.premium);
        assert!(config.mouse);
        assert_eq!(config.shipping_fee().to_string(), "4.50");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_merge_without_args_keeps_config() {
        let mut config = AppConfig {
            premium: false,
            ..AppConfig::default()
        };
        config.merge_with_args(CliArgs::parse_from(["storefront"]));
        assert!(!config.premium);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
