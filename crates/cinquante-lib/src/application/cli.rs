use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// cinquante CLI - name fifty notable women
#[derive(Debug, Clone, Parser)]
#[command(name = "cinquante")]
#[command(about = "A guessing game: name fifty notable women")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// cinquante commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Ok(Self {
            app_config: cli.config,
            command: cli.command,
        })
    }
}

/// Available cinquante commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Start an interactive game session
    Play,

    /// Show version information
    Version,
}

impl Commands {
    /// Check if command talks to the knowledge bases
    pub fn requires_network(&self) -> bool {
        match self {
            Commands::Play => true,
            Commands::Version => false,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
