//! # cinquante Library
//!
//! A terminal guessing game: name fifty notable women, each guess verified
//! against Wikipedia and Wikidata.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and structured-data constants
//! - [`logger`] - Structured logging with progress-bar coexistence
//! - [`networking`] - HTTP client construction and the guess gate
//! - [`api`] - Wikipedia/Wikidata clients (Live and Mock)
//! - [`game`] - Fuzzy matching, the session ledger, and the verification chain
//! - [`application`] - CLI interface, configuration, sessions, and the game loop

pub mod api;
pub mod application;
pub mod game;
pub mod logger;
pub mod networking;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use game::{GuessError, GuessValidator, Ledger};
pub use logger::Logger;
pub use networking::{GuessGate, NetworkingConfig, NetworkingManager};
pub use primitives::{Candidate, ConfigError, Entry, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;

pub async fn main() -> Result<()> {
    // Load the layered CLI configuration
    let config = CliConfig::load_layered()?;

    // Execute the command
    execute_command(config).await
}
