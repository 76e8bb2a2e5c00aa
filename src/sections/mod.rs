//! Password scoring sections
//!
//! Each section checks one rule and is worth one point.

mod digit;
mod length;
mod mixed_case;
mod special;

pub use digit::digit_section;
pub use length::length_section;
pub use mixed_case::mixed_case_section;
pub use special::special_section;

/// Minimum number of characters for the length rule.
pub const MIN_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Result type for section functions.
/// - `Some(message)` - rule not met, with the remediation to show
/// - `None` - rule met
///
/// Rule evaluation on a string cannot fail, so there is no error arm.
pub type SectionResult = Option<String>;
