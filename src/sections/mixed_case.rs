//! Mixed case section - requires both an uppercase and a lowercase letter.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one ASCII uppercase and one ASCII lowercase letter.
///
/// Both are needed for the point; one without the other fails the rule.
pub fn mixed_case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Include both uppercase and lowercase letters.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_case_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert!(mixed_case_section(&pwd).is_some());
    }

    #[test]
    fn test_mixed_case_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert!(mixed_case_section(&pwd).is_some());
    }

    #[test]
    fn test_mixed_case_both_present() {
        let pwd = SecretString::new("aB".to_string().into());
        assert_eq!(mixed_case_section(&pwd), None);
    }

    #[test]
    fn test_mixed_case_non_ascii_letters_do_not_count() {
        let pwd = SecretString::new("Éé".to_string().into());
        assert!(mixed_case_section(&pwd).is_some());
    }
}
