//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;

/// Default configuration values
pub mod defaults {
    pub const LANGUAGE: &str = "fr";
    pub const TOTAL: &str = "50";
    pub const NET_TIMEOUT: &str = "30";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn language() -> String {
        defaults::LANGUAGE.to_string()
    }

    pub fn total() -> usize {
        defaults::TOTAL.parse().unwrap()
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap()
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Wikipedia language edition to play against
    #[arg(short, long, env = "CINQUANTE_LANGUAGE", default_value = defaults::LANGUAGE)]
    #[serde(default = "default_fns::language")]
    pub language: String,

    /// Number of women to find before the game is won
    #[arg(short = 'n', long, env = "CINQUANTE_TOTAL", default_value = defaults::TOTAL)]
    #[serde(default = "default_fns::total")]
    pub total: usize,

    /// API timeout in seconds
    #[arg(short = 't', long, env = "CINQUANTE_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "CINQUANTE_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json)
    #[arg(long, env = "CINQUANTE_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "CINQUANTE_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "CINQUANTE_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_fns::language(),
            total: default_fns::total(),
            net_timeout: default_fns::net_timeout(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from this configuration
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.language != default_fns::language() {
            self.language = other.language;
        }
        if other.total != default_fns::total() {
            self.total = other.total;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "total must be at least 1".to_string(),
            });
        }

        if self.language.is_empty()
            || !self
                .language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::ValidationFailed {
                reason: format!("invalid language edition: '{}'", self.language),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
