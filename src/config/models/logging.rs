//! Logging configuration model

use crate::utils::logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Falls back to `PRICING_LOG_LEVEL`, then `info`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.level.is_some() {
            self.level = other.level;
        }
        if other.format != LogFormat::default() {
            self.format = other.format;
        }
        self
    }
}
