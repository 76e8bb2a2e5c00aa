//! Random password generation.
//!
//! Every generated password satisfies all four scoring rules by
//! construction. It is not checked against any breach corpus.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;
use zeroize::Zeroize;

use crate::sections::{MIN_LENGTH, SPECIAL_CHARACTERS};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Longest password the generator will produce.
pub const MAX_GENERATED_LENGTH: usize = 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {requested} is outside {minimum}..={maximum}")]
    InvalidLength {
        requested: usize,
        minimum: usize,
        maximum: usize,
    },
}

/// Generates a random password of `length` characters.
///
/// Uses the thread-local CSPRNG seeded from the OS.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidLength`] when `length` is below 8 or
/// above [`MAX_GENERATED_LENGTH`].
pub fn generate_password(length: usize) -> Result<SecretString, GeneratorError> {
    generate_password_with(length, &mut rand::rng())
}

/// Generates a password with the given cryptographically secure RNG.
///
/// One character is drawn from each class (uppercase, lowercase, digit,
/// special), the rest from their union, then the whole sequence is shuffled.
pub fn generate_password_with<R>(length: usize, rng: &mut R) -> Result<SecretString, GeneratorError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if !(MIN_LENGTH..=MAX_GENERATED_LENGTH).contains(&length) {
        return Err(GeneratorError::InvalidLength {
            requested: length,
            minimum: MIN_LENGTH,
            maximum: MAX_GENERATED_LENGTH,
        });
    }

    let specials = SPECIAL_CHARACTERS.as_bytes();
    let pool: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, specials].concat();

    let mut chars = Vec::with_capacity(length);
    for class in [UPPERCASE, LOWERCASE, DIGITS, specials] {
        chars.push(pick(class, rng));
    }
    for _ in 0..length - 4 {
        chars.push(pick(&pool, rng));
    }
    chars.shuffle(rng);

    let password: String = chars.iter().map(|&b| char::from(b)).collect();
    chars.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of length {}", length);

    Ok(SecretString::new(password.into()))
}

fn pick<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.random_range(0..set.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::testing::FixedChecker;
    use crate::breach::BreachStatus;
    use crate::scorer::score_password;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    #[test]
    fn test_generate_rejects_short_lengths() {
        for length in 0..MIN_LENGTH {
            assert_eq!(
                generate_password(length).err(),
                Some(GeneratorError::InvalidLength {
                    requested: length,
                    minimum: MIN_LENGTH,
                    maximum: MAX_GENERATED_LENGTH,
                })
            );
        }
    }

    #[test]
    fn test_generate_rejects_oversized_lengths() {
        for length in [MAX_GENERATED_LENGTH + 1, usize::MAX] {
            assert!(matches!(
                generate_password(length),
                Err(GeneratorError::InvalidLength { requested, .. }) if requested == length
            ));
        }
    }

    #[test]
    fn test_generate_maximum_length() {
        let password = generate_password(MAX_GENERATED_LENGTH).expect("maximum is valid");
        assert_eq!(password.expose_secret().len(), MAX_GENERATED_LENGTH);
    }

    #[test]
    fn test_generate_minimum_length_has_every_class() {
        let password = generate_password(8).expect("length 8 is valid");
        let pwd = password.expose_secret();

        assert_eq!(pwd.chars().count(), 8);
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        assert!(pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c)));
    }

    #[test]
    fn test_generate_scores_four_for_all_lengths() {
        let checker = FixedChecker(BreachStatus::Clean);
        for length in 8..=64 {
            let password = generate_password(length).expect("valid length");
            assert_eq!(password.expose_secret().len(), length);

            let result = score_password(&password, &checker);
            assert_eq!(result.score, 4, "length {}", length);
        }
    }

    #[test]
    fn test_generate_only_uses_pool_characters() {
        let password = generate_password(64).expect("valid length");
        assert!(password
            .expose_secret()
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || SPECIAL_CHARACTERS.as_bytes().contains(&b)));
    }

    #[test]
    fn test_generate_outputs_are_distinct() {
        let outputs: HashSet<String> = (0..1000)
            .map(|_| {
                generate_password(16)
                    .expect("valid length")
                    .expose_secret()
                    .to_string()
            })
            .collect();
        assert!(outputs.len() >= 990, "only {} distinct", outputs.len());
    }

    #[test]
    fn test_generate_is_not_positionally_predictable() {
        // Without the shuffle the first char would always be uppercase.
        let mut rng = StdRng::seed_from_u64(7);
        let first_not_upper = (0..200)
            .filter_map(|_| generate_password_with(8, &mut rng).ok())
            .filter(|p| !p.expose_secret().starts_with(|c: char| c.is_ascii_uppercase()))
            .count();
        assert!(first_not_upper > 0);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_reproducible() {
        let a = generate_password_with(20, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_password_with(20, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }
}
