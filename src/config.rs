use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional TOML file with demo settings.
pub const CONFIG_ENV: &str = "SOLID_CONFIG";

/// Values fed into the demos. Every field has a default, so an empty file
/// (or no file at all) reproduces the stock output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub color: bool,
    pub order: OrderSettings,
    pub payment: PaymentSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    pub id: u32,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub content: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            order: OrderSettings::default(),
            payment: PaymentSettings::default(),
            report: ReportSettings::default(),
        }
    }
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self { id: 1, amount: 250 }
    }
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self { amount: 1000.0 }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            content: "Annual Financial Report".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads `$SOLID_CONFIG` when set, then honors `NO_COLOR`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading demo config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        if std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let amount = self.payment.amount;
        if !amount.is_finite() {
            return Err(ConfigError::invalid("payment.amount", "must be a finite number"));
        }
        if amount < 0.0 {
            return Err(ConfigError::invalid("payment.amount", "must not be negative"));
        }
        if self.report.content.trim().is_empty() {
            return Err(ConfigError::invalid("report.content", "must not be blank"));
        }
        Ok(())
    }
}
