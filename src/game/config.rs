//! Game configuration
//!
//! Word length and guess allowance, validated before a round starts. A round
//! copies the configuration when it is created and never reads it again.

use super::error::{GameError, Parameter};
use crate::core::EvaluationRule;
use std::ops::RangeInclusive;

/// Supported word lengths
pub const WORD_LENGTHS: RangeInclusive<usize> = 4..=7;
/// Largest number of guesses per round
pub const MAX_GUESS_ALLOWANCE: usize = 7;
/// Supported numbers of guesses per round
pub const GUESS_ALLOWANCES: RangeInclusive<usize> = 2..=MAX_GUESS_ALLOWANCE;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_GUESS_ALLOWANCE: usize = 7;

/// Parameters of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    guess_allowance: usize,
    rule: EvaluationRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            guess_allowance: DEFAULT_GUESS_ALLOWANCE,
            rule: EvaluationRule::default(),
        }
    }
}

impl GameConfig {
    /// Create a validated configuration with the default evaluation rule
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if either value is out of range.
    pub fn new(word_length: usize, guess_allowance: usize) -> Result<Self, GameError> {
        let mut config = Self::default();
        config.set_word_length(word_length)?;
        config.set_guess_allowance(guess_allowance)?;
        Ok(config)
    }

    /// # Errors
    /// Returns `InvalidConfiguration` and keeps the previous value if `n` is
    /// outside [`WORD_LENGTHS`].
    pub fn set_word_length(&mut self, n: usize) -> Result<(), GameError> {
        validate(Parameter::WordLength, n, &WORD_LENGTHS)?;
        self.word_length = n;
        Ok(())
    }

    /// # Errors
    /// Returns `InvalidConfiguration` and keeps the previous value if `n` is
    /// outside [`GUESS_ALLOWANCES`].
    pub fn set_guess_allowance(&mut self, n: usize) -> Result<(), GameError> {
        validate(Parameter::GuessAllowance, n, &GUESS_ALLOWANCES)?;
        self.guess_allowance = n;
        Ok(())
    }

    pub fn set_rule(&mut self, rule: EvaluationRule) {
        self.rule = rule;
    }

    #[must_use]
    pub const fn with_rule(mut self, rule: EvaluationRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn guess_allowance(&self) -> usize {
        self.guess_allowance
    }

    #[must_use]
    pub const fn rule(&self) -> EvaluationRule {
        self.rule
    }
}

fn validate(parameter: Parameter, value: usize, range: &RangeInclusive<usize>) -> Result<(), GameError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfiguration {
            parameter,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_menu() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.guess_allowance(), 7);
        assert_eq!(config.rule(), EvaluationRule::Membership);
    }

    #[test]
    fn accepts_every_value_in_range() {
        for length in WORD_LENGTHS {
            for allowance in GUESS_ALLOWANCES {
                let config = GameConfig::new(length, allowance).unwrap();
                assert_eq!(config.word_length(), length);
                assert_eq!(config.guess_allowance(), allowance);
            }
        }
    }

    #[test]
    fn rejects_out_of_range_and_keeps_previous() {
        let mut config = GameConfig::new(6, 4).unwrap();

        assert!(matches!(
            config.set_word_length(3),
            Err(GameError::InvalidConfiguration {
                parameter: Parameter::WordLength,
                value: 3,
                ..
            })
        ));
        assert!(config.set_word_length(8).is_err());
        assert!(config.set_guess_allowance(1).is_err());
        assert!(config.set_guess_allowance(8).is_err());

        assert_eq!(config.word_length(), 6);
        assert_eq!(config.guess_allowance(), 4);
    }

    #[test]
    fn new_rejects_bad_allowance() {
        assert!(matches!(
            GameConfig::new(5, 0),
            Err(GameError::InvalidConfiguration {
                parameter: Parameter::GuessAllowance,
                min: 2,
                max: 7,
                ..
            })
        ));
    }

    #[test]
    fn rule_is_selectable() {
        let config = GameConfig::default().with_rule(EvaluationRule::Strict);
        assert_eq!(config.rule(), EvaluationRule::Strict);
    }
}
