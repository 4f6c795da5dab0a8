//! Configuration for Stackform tooling.
//!
//! All configuration is driven by environment variables, with command-line
//! flags layered on top by the binaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::StackformError;
use crate::types::{AccountId, AwsRegion};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl LogFormat {
    /// Returns the configuration string for this format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = StackformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(StackformError::Config(format!(
                "unknown log format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Global configuration for Stackform.
///
/// # Examples
///
/// ```
/// use stackform_core::StackformConfig;
///
/// let config = StackformConfig::default();
/// assert_eq!(config.default_region.as_str(), "us-east-1");
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StackformConfig {
    /// Region attached to requests that do not name one.
    #[builder(default)]
    pub default_region: AwsRegion,
    /// Account that owns the requests.
    #[builder(default)]
    pub account_id: AccountId,
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
    /// Log record format.
    #[builder(default)]
    pub log_format: LogFormat,
}

impl Default for StackformConfig {
    fn default() -> Self {
        Self {
            default_region: AwsRegion::default(),
            account_id: AccountId::default(),
            log_level: "info".to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl StackformConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `ACCOUNT_ID` | `000000000000` |
    /// | `LOG_LEVEL` | `info` |
    /// | `LOG_FORMAT` | `text` |
    ///
    /// # Errors
    ///
    /// Returns [`StackformError`] when a variable is set to a malformed value.
    pub fn from_env() -> Result<Self, StackformError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StackformError`] when a variable is set to a malformed value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StackformError> {
        let mut config = Self::default();

        if let Some(v) = lookup("DEFAULT_REGION") {
            config.default_region = AwsRegion::parse(v)?;
        }
        if let Some(v) = lookup("ACCOUNT_ID") {
            config.account_id = AccountId::new(v)?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("LOG_FORMAT") {
            config.log_format = v.parse()?;
        }

        tracing::debug!(
            region = %config.default_region,
            account = %config.account_id,
            "loaded configuration"
        );
        Ok(config)
    }
}
