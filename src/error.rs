use std::path::PathBuf;
use thiserror::Error;

/// Raised when a variant is asked to perform an operation it cannot honor.
///
/// None of the well-designed variants in this crate ever return it. It exists
/// so a fat interface has something honest to report instead of pretending the
/// call succeeded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("{variant} does not support {operation}")]
    Unsupported {
        variant: &'static str,
        operation: &'static str,
    },
}

impl CapabilityError {
    pub fn unsupported(variant: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { variant, operation }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
#[error("Failed to install log subscriber: {0}")]
pub struct TelemetryError(String);

impl TelemetryError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
