//! Result types shared by the scorer and the breach checkers.

use std::collections::BTreeSet;
use std::fmt;

/// Highest score a password can reach (one point per rule).
pub const MAX_SCORE: u8 = 4;

/// Identifies one of the four scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    MinLength,
    MixedCase,
    HasDigit,
    HasSpecial,
}

impl RuleId {
    /// All rules, in evaluation order.
    pub const ALL: [RuleId; 4] = [
        RuleId::MinLength,
        RuleId::MixedCase,
        RuleId::HasDigit,
        RuleId::HasSpecial,
    ];
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleId::MinLength => "min-length",
            RuleId::MixedCase => "mixed-case",
            RuleId::HasDigit => "has-digit",
            RuleId::HasSpecial => "has-special",
        };
        f.write_str(name)
    }
}

/// A rule that was not satisfied, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub rule: RuleId,
    pub message: String,
}

/// Weak / moderate / strong classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Moderate,
    Strong,
}

impl StrengthTier {
    /// 4 is strong, 2-3 moderate, anything lower weak.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= MAX_SCORE => StrengthTier::Strong,
            2 | 3 => StrengthTier::Moderate,
            _ => StrengthTier::Weak,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            StrengthTier::Strong => "Strong Password!",
            StrengthTier::Moderate => {
                "Moderate Password - Consider adding more security features."
            }
            StrengthTier::Weak => "Weak Password - Improve it using the suggestions below.",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Moderate => "moderate",
            StrengthTier::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Outcome of a breach lookup.
///
/// `Unknown` means the checker could not answer (service down, timeout,
/// bad status). Callers treat it like `Clean` but can still tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreachStatus {
    Clean,
    Breached { count: u64 },
    Unknown,
}

impl BreachStatus {
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Breached { .. })
    }
}

/// Full result of scoring one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    /// Number of satisfied rules, 0 to [`MAX_SCORE`]. Always 0 when breached.
    pub score: u8,
    pub passed_rules: BTreeSet<RuleId>,
    /// Unmet rules in evaluation order.
    pub failed_rules: Vec<RuleFailure>,
    pub breach: BreachStatus,
}

impl ScoreResult {
    pub(crate) fn breached(count: u64) -> Self {
        Self {
            score: 0,
            passed_rules: BTreeSet::new(),
            failed_rules: Vec::new(),
            breach: BreachStatus::Breached { count },
        }
    }

    pub fn is_breached(&self) -> bool {
        self.breach.is_breached()
    }

    /// Strength tier, or `None` for a breached password (no tier applies).
    pub fn tier(&self) -> Option<StrengthTier> {
        if self.is_breached() {
            return None;
        }
        Some(StrengthTier::from_score(self.score))
    }

    /// Fill ratio for a strength meter, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }

    /// Headline text for the verdict.
    pub fn summary(&self) -> &'static str {
        match self.tier() {
            Some(tier) => tier.summary(),
            None => "This password has been leaked in data breaches! Choose a different one!",
        }
    }

    pub fn failed_rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.failed_rules.iter().map(|f| f.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_score() {
        assert_eq!(StrengthTier::from_score(0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(1), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(2), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_score(3), StrengthTier::Moderate);
        assert_eq!(StrengthTier::from_score(4), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(StrengthTier::Strong.to_string(), "strong");
        assert_eq!(StrengthTier::Moderate.to_string(), "moderate");
        assert_eq!(StrengthTier::Weak.to_string(), "weak");
    }

    #[test]
    fn test_breached_result_has_no_tier() {
        let result = ScoreResult::breached(42);
        assert!(result.is_breached());
        assert_eq!(result.tier(), None);
        assert_eq!(result.score, 0);
        assert!(result.failed_rules.is_empty());
        assert!(result.summary().contains("leaked"));
    }

    #[test]
    fn test_unknown_is_not_breached() {
        assert!(!BreachStatus::Unknown.is_breached());
        assert!(!BreachStatus::Clean.is_breached());
        assert!(BreachStatus::Breached { count: 1 }.is_breached());
    }

    #[test]
    fn test_progress() {
        let result = ScoreResult {
            score: 3,
            passed_rules: BTreeSet::new(),
            failed_rules: Vec::new(),
            breach: BreachStatus::Clean,
        };
        assert!((result.progress() - 0.75).abs() < f32::EPSILON);
    }
}
