use reqwest::Client;
use thiserror::Error;
use tokio::sync::{Semaphore, SemaphorePermit, TryAcquireError};
use tracing::trace;

/// Networking errors for knowledge-base communication
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid timeout: {seconds}s (must be > 0)")]
    InvalidTimeout { seconds: u64 },
}

/// Networking configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

/// Networking manager for knowledge-base lookups
pub struct NetworkingManager {
    client: Client,
}

impl NetworkingManager {
    /// Create networking manager with a timeout-bounded client
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        if config.timeout_seconds == 0 {
            return Err(NetworkingError::InvalidTimeout {
                seconds: config.timeout_seconds,
            });
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()?;

        trace!(
            "Networking manager initialized with {}s timeout",
            config.timeout_seconds
        );

        Ok(Self { client })
    }

    /// Get HTTP client for API requests
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Serialization gate for guess validation.
///
/// The verification chain mutates the ledger after a series of remote
/// calls, so at most one validation may be in flight: a second submission
/// while the permit is held is refused at the boundary, never queued.
pub struct GuessGate {
    slot: Semaphore,
}

impl GuessGate {
    pub fn new() -> Self {
        Self {
            slot: Semaphore::new(1),
        }
    }

    /// Claim the validation slot. Returns `None` while another guess holds it.
    pub fn try_begin(&self) -> Option<GuessPermit<'_>> {
        match self.slot.try_acquire() {
            Ok(permit) => Some(GuessPermit { _permit: permit }),
            Err(TryAcquireError::NoPermits) => None,
            Err(TryAcquireError::Closed) => None,
        }
    }

    /// Whether a validation currently holds the slot
    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }
}

impl Default for GuessGate {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for the validation slot; dropping it reopens the gate
pub struct GuessPermit<'a> {
    _permit: SemaphorePermit<'a>,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
