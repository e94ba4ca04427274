//! Configuration loading
//!
//! Coordinates the configuration sources in precedence order:
//! defaults -> .env files -> standard env vars -> CLI arguments.

use crate::primitives::ConfigError;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

impl CliConfig {
    /// Load the fully layered configuration along with the requested command
    pub fn load_layered() -> Result<Self, ConfigError> {
        use dotenvy::from_filename;

        // 1. Start with defaults
        let mut config = AppConfig::default();

        // 2. Load .env files (if they exist, don't error if missing).
        // dotenvy only sets variables that aren't already in the environment,
        // so real env vars keep precedence over file contents.
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                if !e.to_string().contains("not found") && !e.to_string().contains("No such file") {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        // 3. Handle standard environment variables (NO_COLOR and friends)
        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        // 4. Override with CLI arguments (highest precedence; clap also
        // folds in the CINQUANTE_* variables via its env attributes)
        let cli = CliConfig::load()?;
        let config = config.merge_with(cli.app_config);

        // 5. Post-process and validate
        config.validate()?;

        Ok(CliConfig {
            app_config: config,
            command: cli.command,
        })
    }
}
