//! Breach lookup
//!
//! A [`BreachChecker`] answers "has this password appeared in a breach?"
//! with a [`BreachStatus`]. The scorer only sees the trait, so the remote
//! service can be swapped for a local corpus or a stub.

mod corpus;
mod pwned;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

pub use crate::types::BreachStatus;
pub use corpus::{get_corpus_path, CorpusError, LocalCorpus};
pub use pwned::{BreachServiceError, PwnedConfig, PwnedPasswords, DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Length of the hash prefix sent to a range lookup.
pub const PREFIX_LEN: usize = 5;

/// Capability: given a password, answer breached / clean / unknown.
pub trait BreachChecker: Send + Sync {
    /// Looks the password up. Never fails: an unanswerable lookup is
    /// reported as [`BreachStatus::Unknown`].
    fn check(&self, password: &SecretString) -> BreachStatus;

    /// `true` only for a confirmed breach. Unknown counts as not pwned.
    fn is_pwned(&self, password: &SecretString) -> bool {
        self.check(password).is_breached()
    }
}

/// Checks a password against the Pwned Passwords service with the
/// default configuration.
///
/// Fails open: returns `false` if the service does not answer.
pub fn is_pwned(password: &SecretString) -> bool {
    is_pwned_with(password, PwnedConfig::default())
}

/// One-off check with a custom configuration.
///
/// Builds a fresh client per call. Keep a [`PwnedPasswords`] around for
/// repeated checks.
pub fn is_pwned_with(password: &SecretString, config: PwnedConfig) -> bool {
    PwnedPasswords::new(config).is_pwned(password)
}

/// Uppercase hex SHA-1 of a password, split for a k-anonymity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HashRange {
    hash: String,
}

impl HashRange {
    pub(crate) fn of(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hash: hex::encode_upper(digest),
        }
    }

    /// First 5 hex characters. The only part that leaves the process.
    pub(crate) fn prefix(&self) -> &str {
        &self.hash[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters.
    pub(crate) fn suffix(&self) -> &str {
        &self.hash[PREFIX_LEN..]
    }

    pub(crate) fn full(&self) -> &str {
        &self.hash
    }
}

/// Finds `suffix` in a range response body (`SUFFIX:COUNT` per line).
///
/// Comparison is case-insensitive. Returns the breach count on a match.
/// Padding entries (count 0) never match. A matching line with an
/// unreadable count is reported as seen once.
pub(crate) fn find_suffix(body: &str, suffix: &str) -> Option<u64> {
    body.lines().find_map(|line| {
        let (candidate, count) = line.trim().split_once(':')?;
        if !candidate.trim().eq_ignore_ascii_case(suffix) {
            return None;
        }
        match count.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(n) => Some(n),
            Err(_) => Some(1),
        }
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Checker that always returns the same status.
    pub struct FixedChecker(pub BreachStatus);

    impl BreachChecker for FixedChecker {
        fn check(&self, _password: &SecretString) -> BreachStatus {
            self.0
        }
    }

    /// URL of a local port nobody listens on.
    pub fn closed_local_url() -> String {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .expect("Failed to bind")
            .local_addr()
            .expect("Failed to read local addr")
            .port();
        format!("http://127.0.0.1:{}", port)
    }
}
