//! Pwned Passwords range lookup (k-anonymity).
//!
//! Only the first five hex characters of the SHA-1 hash are sent. The
//! service answers with every known suffix for that prefix and the match
//! happens locally.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use secrecy::SecretString;
use thiserror::Error;

use super::{find_suffix, BreachChecker, HashRange};
use crate::types::BreachStatus;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// The breach service could not give an answer.
#[derive(Error, Debug)]
pub enum BreachServiceError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Breach service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Breach service returned status {0}")]
    UnexpectedStatus(u16),
}

/// Settings for [`PwnedPasswords`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwnedConfig {
    /// Service root, without the `/range/` path.
    pub base_url: String,
    /// Bound on the whole request. On expiry the check fails open.
    pub timeout: Duration,
    /// Ask the service to pad responses with fake zero-count entries.
    pub add_padding: bool,
    pub user_agent: String,
}

impl Default for PwnedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            add_padding: true,
            user_agent: format!("pwd-meter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PwnedConfig {
    /// Default configuration with environment overrides.
    ///
    /// - `PWD_PWNED_API_URL`: service root
    /// - `PWD_PWNED_TIMEOUT_MS`: request timeout in milliseconds
    ///
    /// Unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("PWD_PWNED_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(ms) = std::env::var("PWD_PWNED_TIMEOUT_MS") {
            match ms.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring invalid PWD_PWNED_TIMEOUT_MS: {:?}", ms);
                }
            }
        }
        config
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

/// [`BreachChecker`] backed by the Pwned Passwords range API.
///
/// The underlying blocking HTTP client is built on the first lookup, so a
/// checker can be created inside an async runtime and handed to
/// [`score_password_tx`](crate::score_password_tx).
#[derive(Debug, Clone)]
pub struct PwnedPasswords {
    client: OnceLock<Client>,
    config: PwnedConfig,
}

impl PwnedPasswords {
    pub fn new(config: PwnedConfig) -> Self {
        Self {
            client: OnceLock::new(),
            config,
        }
    }

    fn client(&self) -> Result<&Client, BreachServiceError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .user_agent(self.config.user_agent.clone())
            .timeout(self.config.timeout)
            .build()
            .map_err(BreachServiceError::Client)?;
        Ok(self.client.get_or_init(|| client))
    }

    pub fn config(&self) -> &PwnedConfig {
        &self.config
    }

    /// Fetches the raw range body for a 5-character hash prefix.
    ///
    /// One request, no retries. Any status other than 200 is an error.
    pub fn lookup_range(&self, prefix: &str) -> Result<String, BreachServiceError> {
        let mut request = self.client()?.get(self.config.range_url(prefix));
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(BreachServiceError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }

    fn try_check(&self, range: &HashRange) -> Result<BreachStatus, BreachServiceError> {
        let body = self.lookup_range(range.prefix())?;
        Ok(match find_suffix(&body, range.suffix()) {
            Some(count) => BreachStatus::Breached { count },
            None => BreachStatus::Clean,
        })
    }
}

// A blocking client must not be dropped on an async worker thread.
#[cfg(feature = "async")]
impl Drop for PwnedPasswords {
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            if tokio::runtime::Handle::try_current().is_ok() {
                std::thread::spawn(move || drop(client));
            }
        }
    }
}

impl BreachChecker for PwnedPasswords {
    fn check(&self, password: &SecretString) -> BreachStatus {
        let range = HashRange::of(password);
        match self.try_check(&range) {
            Ok(status) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Range lookup for prefix {}: {:?}", range.prefix(), status);
                status
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Breach service unavailable for prefix {}, failing open: {}",
                    range.prefix(),
                    _e
                );
                BreachStatus::Unknown
            }
        }
    }
}
