//! # Configuration State
//!
//! Display settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--output`)
//! 2. Environment variables (`KASIR_*`)
//! 3. Config file (`--config <path>`, else `kasir.toml` in the platform
//!    config directory)
//! 4. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use kasir_core::Money;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `KASIR_STORE_NAME`.
pub const ENV_PREFIX: &str = "KASIR";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (shown in the role menu banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Render `Rp10.000` instead of `Rp10000`
    pub group_thousands: bool,

    /// How tables and receipts are printed
    pub output: OutputFormat,
}

/// Output format for tables and receipts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables
    #[default]
    Table,

    /// Pretty-printed JSON
    Json,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Toko Indomaret".to_string(),
            currency_symbol: "Rp".to_string(),
            group_thousands: false,
            output: OutputFormat::Table,
        }
    }
}

impl ConfigState {
    /// Loads configuration from all sources.
    ///
    /// An explicit `path` must exist. Without one, the platform default
    /// (`~/.config/kasir/kasir.toml` on Linux) is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_layers(Some(path), true, ENV_PREFIX),
            None => {
                let default_path = default_config_path();
                Self::load_layers(default_path.as_deref(), false, ENV_PREFIX)
            }
        }
    }

    /// Builds the layered configuration: defaults, then `file`, then
    /// environment variables starting with `env_prefix`.
    pub fn load_layers(
        file: Option<&Path>,
        required: bool,
        env_prefix: &str,
    ) -> Result<Self, ConfigError> {
        let defaults = ConfigState::default();

        let mut builder = Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("group_thousands", defaults.group_thousands)?
            .set_default("output", "table")?;

        if let Some(file) = file {
            builder = builder.add_source(File::from(file).required(required));
        }

        builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Formats a whole-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState { group_thousands: true, ..ConfigState::default() };
    /// assert_eq!(config.format_money(Money::from_units(1234567)), "Rp1.234.567");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let units = amount.units();
        let digits = units.unsigned_abs().to_string();

        format!(
            "{}{}{}",
            if units < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.group_thousands {
                group_digits(&digits)
            } else {
                digits
            }
        )
    }
}

/// `kasir.toml` in the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("id", "kasir", "kasir").map(|dirs| dirs.config_dir().join("kasir.toml"))
}

/// Inserts `.` between every group of three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
