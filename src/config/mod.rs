use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::{DaybookError, Result};
use crate::utils::{
    fs::write_staged,
    paths::{config_file_in, ensure_dir},
};

/// Keys accepted by `config set`.
pub const SETTABLE_KEYS: &[&str] = &["currency_symbol", "ui_color_enabled", "show_week_strip"];

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_true")]
    pub show_week_strip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: true,
            show_week_strip: true,
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "$".into()
    }

    fn default_true() -> bool {
        true
    }

    /// Applies a `key value` pair from the shell.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency_symbol" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(DaybookError::InvalidInput(
                        "currency_symbol cannot be empty".into(),
                    ));
                }
                self.currency_symbol = symbol.to_string();
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(key, value)?,
            "show_week_strip" => self.show_week_strip = parse_bool(key, value)?,
            other => {
                return Err(DaybookError::InvalidInput(format!(
                    "unknown config key `{}` (expected one of: {})",
                    other,
                    SETTABLE_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("show_week_strip", self.show_week_strip.to_string()),
        ]
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(DaybookError::InvalidInput(format!(
            "`{}` expects true or false, got `{}`",
            key, other
        ))),
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| DaybookError::Config(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| DaybookError::Config(err.to_string()))?;
        write_staged(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
