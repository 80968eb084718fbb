//! Server seed validation.

use std::str::FromStr;
use thiserror::Error;

/// Required seed length after trimming.
const SEED_LEN: usize = 64;

/// Why a seed string was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("server seed must be exactly 64 characters, got {0}")]
    WrongLength(usize),

    #[error("server seed must be lowercase hex, found {0:?}")]
    InvalidCharacter(char),
}

/// A validated server seed: exactly 64 lowercase hex characters.
///
/// Validation is the seed's entire role here; the selection draw does not
/// consume it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSeed(String);

impl ServerSeed {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ServerSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(bad) = trimmed.chars().find(|c| !matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(SeedError::InvalidCharacter(bad));
        }
        if trimmed.len() != SEED_LEN {
            return Err(SeedError::WrongLength(trimmed.len()));
        }

        Ok(Self(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "f6a3bb1c09d2774e5ad00c2a1b83fe64905512c7dd9eab34f0681cc19e24b7d5";

    #[test]
    fn test_valid_seed_is_accepted() {
        let seed: ServerSeed = VALID.parse().unwrap();
        assert_eq!(seed.as_str(), VALID);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let input = format!("  {}\n", VALID);
        let seed: ServerSeed = input.parse().unwrap();
        assert_eq!(seed.as_str(), VALID);
    }

    #[test]
    fn test_short_seed_is_rejected() {
        assert_eq!("abc".parse::<ServerSeed>(), Err(SeedError::WrongLength(3)));
    }

    #[test]
    fn test_length_off_by_one_is_rejected() {
        let short = &VALID[..63];
        assert_eq!(short.parse::<ServerSeed>(), Err(SeedError::WrongLength(63)));

        let long = format!("{}0", VALID);
        assert_eq!(long.parse::<ServerSeed>(), Err(SeedError::WrongLength(65)));
    }

    #[test]
    fn test_uppercase_hex_is_rejected() {
        let upper = VALID.to_uppercase();
        assert!(matches!(
            upper.parse::<ServerSeed>(),
            Err(SeedError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_non_hex_character_is_rejected() {
        let mut bad = VALID.to_owned();
        bad.replace_range(10..11, "g");
        assert_eq!(bad.parse::<ServerSeed>(), Err(SeedError::InvalidCharacter('g')));
    }

    #[test]
    fn test_all_digits_is_accepted() {
        let digits = "1234567890".repeat(7);
        let digits = &digits[..64];
        assert!(digits.parse::<ServerSeed>().is_ok());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!("".parse::<ServerSeed>(), Err(SeedError::WrongLength(0)));
        assert_eq!("   ".parse::<ServerSeed>(), Err(SeedError::WrongLength(0)));
    }
}
