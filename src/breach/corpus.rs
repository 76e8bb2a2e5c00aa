//! Local breach corpus
//!
//! Offline [`BreachChecker`] loaded from a text file.

use std::collections::HashMap;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use super::{BreachChecker, HashRange};
use crate::types::BreachStatus;

const SHA1_HEX_LEN: usize = 40;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Breach corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read breach corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Breach corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_CORPUS_PATH`
/// 2. Default path `./assets/breached.txt`
pub fn get_corpus_path() -> PathBuf {
    std::env::var("PWD_BREACH_CORPUS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/breached.txt"))
}

/// Breached hashes held in memory, keyed by full uppercase SHA-1.
#[derive(Debug, Clone, Default)]
pub struct LocalCorpus {
    hashes: HashMap<String, u64>,
}

impl LocalCorpus {
    /// Loads the corpus from [`get_corpus_path`].
    pub fn from_env() -> Result<Self, CorpusError> {
        Self::from_path(get_corpus_path())
    }

    /// Loads the corpus from a file.
    ///
    /// Each non-empty line is either a `SHA1HEX[:COUNT]` entry, as in the
    /// Pwned Passwords downloads, or a plaintext password that gets hashed.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach corpus load FAILED: FileNotFound {:?}", path);
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Breach corpus load FAILED: Empty file {:?}", path);
            return Err(CorpusError::EmptyFile);
        }

        let corpus = Self::from_lines(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Breach corpus loaded: {} hashes from {:?}", corpus.len(), path);

        Ok(corpus)
    }

    /// Builds a corpus from in-memory lines, same format as [`Self::from_path`].
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut hashes = HashMap::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let (hash, count) = parse_entry(line);
            *hashes.entry(hash).or_insert(0) += count;
        }
        Self { hashes }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// Splits a corpus line into (uppercase SHA-1, count).
///
/// Hash entries tolerate surrounding whitespace. Plaintext entries are
/// taken verbatim, so leading and trailing spaces are part of the password.
fn parse_entry(line: &str) -> (String, u64) {
    let (head, count) = match line.split_once(':') {
        Some((head, count)) => (head.trim(), count.trim().parse::<u64>().ok()),
        None => (line.trim(), None),
    };

    if head.len() == SHA1_HEX_LEN && head.chars().all(|c| c.is_ascii_hexdigit()) {
        return (head.to_ascii_uppercase(), count.unwrap_or(1).max(1));
    }

    // Plaintext entry: the whole line is the password.
    let secret = SecretString::new(line.to_string().into());
    (HashRange::of(&secret).full().to_string(), 1)
}

impl BreachChecker for LocalCorpus {
    fn check(&self, password: &SecretString) -> BreachStatus {
        let range = HashRange::of(password);
        match self.hashes.get(range.full()) {
            Some(&count) => BreachStatus::Breached { count },
            None => BreachStatus::Clean,
        }
    }
}
