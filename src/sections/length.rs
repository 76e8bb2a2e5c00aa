//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{SectionResult, MIN_LENGTH};

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }
    None
}
