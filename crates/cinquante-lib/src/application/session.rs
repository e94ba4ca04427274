//! Command session architecture
//!
//! Implements the Session-Scoped Dependency Injection Pattern.
//! Each command execution creates a session that owns all ephemeral state:
//! the knowledge-base clients, the configuration, and the player-input
//! channel. Handlers see providers, never globals.

use crate::api::{LiveWikidataClient, LiveWikipediaClient, WikidataClient, WikipediaClient};
use crate::application::config::AppConfig;
use crate::logger::Logger;
use crate::networking::{NetworkingConfig, NetworkingManager};
use crate::primitives::ColorIntent;
use anyhow::{Context, Result};

/// Provider trait for knowledge-base access.
///
/// Associated types rather than trait objects: the client traits return
/// `impl Future` and are not dyn-compatible.
pub trait ApiProvider {
    type Wikipedia: WikipediaClient + Sync;
    type Wikidata: WikidataClient + Sync;

    fn wikipedia(&self) -> &Self::Wikipedia;
    fn wikidata(&self) -> &Self::Wikidata;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    /// Get the application configuration
    fn app_config(&self) -> &AppConfig;
}

/// Provider trait for player input
pub trait InteractiveProvider {
    /// Next guess line from the player; `None` ends the session
    fn next_guess(&self, prompt: &str) -> Result<Option<String>>;
}

/// Session trait that CommandSession and mock sessions implement
pub trait Session {
    type Api: ApiProvider;

    /// Get the knowledge-base provider for this session
    fn api(&self) -> &Self::Api;

    /// Get the config provider for this session
    fn config(&self) -> &dyn ConfigProvider;

    /// Get the interactive provider for this session
    fn interactive(&self) -> &dyn InteractiveProvider;
}

/// Live implementation of ApiProvider
pub struct LiveApiProvider {
    wikipedia: LiveWikipediaClient,
    wikidata: LiveWikidataClient,
}

impl LiveApiProvider {
    /// Create live clients sharing the session's HTTP client
    pub fn new(networking: &NetworkingManager, language: &str) -> Self {
        Self {
            wikipedia: LiveWikipediaClient::new(networking.client().clone(), language),
            wikidata: LiveWikidataClient::new(networking.client().clone()),
        }
    }
}

impl ApiProvider for LiveApiProvider {
    type Wikipedia = LiveWikipediaClient;
    type Wikidata = LiveWikidataClient;

    fn wikipedia(&self) -> &LiveWikipediaClient {
        &self.wikipedia
    }

    fn wikidata(&self) -> &LiveWikidataClient {
        &self.wikidata
    }
}

/// Live implementation of ConfigProvider
pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Live implementation of InteractiveProvider
pub struct LiveInteractiveProvider;

impl LiveInteractiveProvider {
    pub fn new() -> Self {
        Self
    }

    /// Check if we're in a TTY environment suitable for interactive prompts
    fn is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

impl Default for LiveInteractiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn next_guess(&self, prompt: &str) -> Result<Option<String>> {
        if Self::is_tty() {
            use dialoguer::Input;

            match Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
            {
                Ok(line) => Ok(Some(line)),
                Err(dialoguer::Error::IO(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    Ok(None)
                }
                Err(e) => Err(e).context("Failed to read guess"),
            }
        } else {
            // Piped input: plain line reads, EOF ends the session
            use std::io::BufRead;

            let mut line = String::new();
            let read = std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read guess from stdin")?;

            if read == 0 {
                Ok(None)
            } else {
                Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
            }
        }
    }
}

/// CommandSession owns all ephemeral state for a single command execution
pub struct CommandSession<A, C, I>
where
    A: ApiProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Knowledge-base provider
    api_provider: A,
    /// Configuration provider
    config_provider: C,
    /// Interactive input provider
    interactive_provider: I,
}

impl CommandSession<LiveApiProvider, LiveConfigProvider, LiveInteractiveProvider> {
    /// Create a new command session with owned state (production composition)
    pub fn new(app_config: AppConfig) -> Result<Self> {
        // Logger init is best-effort: a later session in the same process
        // keeps the first subscriber
        let _ = Logger::init(app_config.to_logger_config());

        match app_config.color {
            ColorIntent::Always => console::set_colors_enabled(true),
            ColorIntent::Never => console::set_colors_enabled(false),
            ColorIntent::Auto => {}
        }

        let networking = NetworkingManager::new(NetworkingConfig {
            timeout_seconds: app_config.net_timeout,
        })
        .context("Failed to initialize HTTP client")?;

        let api_provider = LiveApiProvider::new(&networking, &app_config.language);

        Ok(Self {
            api_provider,
            config_provider: LiveConfigProvider::new(app_config),
            interactive_provider: LiveInteractiveProvider::new(),
        })
    }
}

impl<A, C, I> CommandSession<A, C, I>
where
    A: ApiProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Create a generic command session with custom providers (for testing)
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_with_providers(api_provider: A, config_provider: C, interactive_provider: I) -> Self {
        Self {
            api_provider,
            config_provider,
            interactive_provider,
        }
    }

    /// Get the knowledge-base provider for this session
    pub fn api(&self) -> &A {
        &self.api_provider
    }

    /// Get the interactive provider for this session
    pub fn interactive(&self) -> &I {
        &self.interactive_provider
    }
}

impl<A, C, I> Session for CommandSession<A, C, I>
where
    A: ApiProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    type Api = A;

    fn api(&self) -> &A {
        &self.api_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}
