//! Structured logging with progress-bar coexistence
//!
//! Wraps tracing-subscriber behind a single global init so log lines and
//! indicatif progress bars share the terminal without clobbering each other.

use crate::primitives::*;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger handle backed by the global tracing subscriber
#[derive(Debug)]
pub struct Logger {
    _guard: (),
}

impl Logger {
    /// Initialize the global logger from application configuration
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // Indicatif layer keeps progress bars below the log stream
        let indicatif_layer = IndicatifLayer::new();

        // RUST_LOG wins; otherwise build a filter focused on this crate with
        // the HTTP stack held at warn
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level_str = match config.level {
                LogLevel::Error => "error",
                LogLevel::Warning => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            };

            let filter_str = format!(
                "cinquante={},hyper_util=warn,reqwest=warn,h2=warn,tokio=warn,mio=warn,want=warn,{}",
                level_str, level_str
            );

            EnvFilter::new(filter_str)
        });

        let ansi = match config.color {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => console::colors_enabled(),
        };

        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(false)
                .json()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = Logger { _guard: () };

        GLOBAL_LOGGER
            .set(logger)
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            "Logger initialized"
        );

        Ok(GLOBAL_LOGGER.get().unwrap())
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
