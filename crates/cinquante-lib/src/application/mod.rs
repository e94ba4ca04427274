//! Application layer modules
//!
//! Organizes CLI interface, configuration management, session wiring, and
//! the interactive game loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;
pub mod session;
pub mod session_mocks;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, Commands};
pub use commands::{execute_command, execute_command_with_session};
pub use config::AppConfig;
pub use session::{CommandSession, Session};
