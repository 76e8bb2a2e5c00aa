//! Password strength scorer - main scoring logic.

use std::collections::BTreeSet;

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, BreachStatus};
use crate::sections::{
    digit_section, length_section, mixed_case_section, special_section, SectionResult,
};
use crate::types::{RuleFailure, RuleId, ScoreResult};

/// Scores a password against the four rules.
///
/// The breach check runs first. A breached password short-circuits: no
/// rule is evaluated and the result carries no feedback. An `Unknown`
/// breach status fails open and scoring continues.
///
/// # Arguments
/// * `password` - The password to score
/// * `checker` - Breach lookup to consult before the rules
pub fn score_password<C>(password: &SecretString, checker: &C) -> ScoreResult
where
    C: BreachChecker + ?Sized,
{
    let breach = checker.check(password);
    if let BreachStatus::Breached { count } = breach {
        return ScoreResult::breached(count);
    }

    // Orchestrator: execute sections in sequence
    let sections: [(RuleId, fn(&SecretString) -> SectionResult); 4] = [
        (RuleId::MinLength, length_section),
        (RuleId::MixedCase, mixed_case_section),
        (RuleId::HasDigit, digit_section),
        (RuleId::HasSpecial, special_section),
    ];

    let mut passed_rules = BTreeSet::new();
    let mut failed_rules = Vec::new();

    for (rule, section_fn) in sections {
        match section_fn(password) {
            Some(message) => failed_rules.push(RuleFailure { rule, message }),
            None => {
                passed_rules.insert(rule);
            }
        }
    }

    let score = passed_rules.len() as u8;

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {}/4 (breach status: {:?})", score, breach);

    ScoreResult {
        score,
        passed_rules,
        failed_rules,
        breach,
    }
}

/// Async version that scores on the blocking pool and sends the result via channel.
///
/// If `token` is cancelled before scoring completes, nothing is sent.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: SecretString,
    checker: Arc<dyn BreachChecker>,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Password scoring cancelled before start");
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("scoring is about to start...");

    let task = tokio::task::spawn_blocking(move || score_password(&password, checker.as_ref()));

    let result = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("Password scoring cancelled");
            return;
        }
        joined = task => match joined {
            Ok(result) => result,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password scoring task failed: {}", _e);
                return;
            }
        },
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score result: {}", _e);
    }
}
