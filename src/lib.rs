//! Password strength scoring and generation library
//!
//! This library scores passwords against four rules (length, mixed case,
//! digit, special character) after checking them against a breach corpus,
//! and generates random passwords that satisfy every rule.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Breach lookup
//!
//! The default checker is [`PwnedPasswords`], a k-anonymity range lookup:
//! only the first five hex characters of the password's SHA-1 leave the
//! process. Lookups fail open. If the service is unreachable the password
//! is scored normally and the result carries [`BreachStatus::Unknown`].
//! [`LocalCorpus`] is an offline alternative loaded from a file.
//!
//! # Environment Variables
//!
//! Read only by the opt-in `from_env` constructors:
//!
//! - `PWD_PWNED_API_URL`: Pwned Passwords service root
//! - `PWD_PWNED_TIMEOUT_MS`: lookup timeout (default: 3000)
//! - `PWD_BREACH_CORPUS_PATH`: local corpus file
//!   (default: `./assets/breached.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{generate_password, score_password, PwnedConfig, PwnedPasswords};
//! use secrecy::SecretString;
//!
//! let checker = PwnedPasswords::new(PwnedConfig::default());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = score_password(&password, &checker);
//!
//! println!("Score: {}/4", result.score);
//! println!("{}", result.summary());
//! for failure in &result.failed_rules {
//!     println!("- {}", failure.message);
//! }
//!
//! let generated = generate_password(16).expect("16 is a valid length");
//! ```

// Internal modules
mod breach;
mod generator;
mod scorer;
mod sections;
mod types;

// Public API
pub use breach::{
    get_corpus_path, is_pwned, is_pwned_with, BreachChecker, BreachServiceError, CorpusError, LocalCorpus,
    PwnedConfig, PwnedPasswords, DEFAULT_API_URL, DEFAULT_TIMEOUT, PREFIX_LEN,
};
pub use generator::{
    generate_password, generate_password_with, GeneratorError, MAX_GENERATED_LENGTH,
};
pub use scorer::score_password;
pub use sections::{MIN_LENGTH, SPECIAL_CHARACTERS};
pub use types::{BreachStatus, RuleFailure, RuleId, ScoreResult, StrengthTier, MAX_SCORE};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
