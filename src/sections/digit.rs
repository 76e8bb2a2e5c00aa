//! Digit section

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Add at least one number (0-9).".to_string());
    }
    None
}
