//! Special character section - checks against the fixed set `!@#$%^&*`.

use secrecy::{ExposeSecret, SecretString};
use super::{SectionResult, SPECIAL_CHARACTERS};

/// Checks for at least one character from [`SPECIAL_CHARACTERS`].
///
/// Other punctuation (`-`, `_`, `?`, spaces...) does not count.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
    {
        return Some(format!(
            "Include at least one special character ({}).",
            SPECIAL_CHARACTERS
        ));
    }
    None
}
