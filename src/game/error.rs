//! Errors and advisories raised by the game engine
//!
//! Advisories are expected outcomes of normal play and never change state.
//! `GameError`s mean the caller broke a precondition or the environment is
//! missing data; they should be propagated, not shown and forgotten.

use crate::wordlists::DictionaryUnavailable;
use std::fmt;

/// Recoverable, player-facing conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Submitted word has fewer letters than the configured length
    TooShort,
    /// Submitted word is not in the acceptable list
    NotARecognizedWord,
    /// Submitted word was already guessed this round
    AlreadyGuessed,
    /// Letter typed into a full row
    MaxLengthReached,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::TooShort => "The word is too short!",
            Self::NotARecognizedWord => "The word wasn't recognized!",
            Self::AlreadyGuessed => "The word has already been guessed on!",
            Self::MaxLengthReached => "Max word length reached!",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for Advisory {}

/// Configuration parameter named in an `InvalidConfiguration` error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    WordLength,
    GuessAllowance,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLength => write!(f, "word length"),
            Self::GuessAllowance => write!(f, "guess allowance"),
        }
    }
}

/// Hard failures: misuse of the engine or missing data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration {
        parameter: Parameter,
        value: usize,
        min: usize,
        max: usize,
    },
    DictionaryUnavailable(DictionaryUnavailable),
    ConfigurationLocked,
    RoundAlreadyEnded,
    RoundNotStarted,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                min,
                max,
            } => write!(f, "Invalid {parameter} {value}: must be between {min} and {max}"),
            Self::DictionaryUnavailable(inner) => write!(f, "{inner}"),
            Self::ConfigurationLocked => {
                write!(f, "Configuration cannot change while a round is in progress")
            }
            Self::RoundAlreadyEnded => write!(f, "The round has already ended"),
            Self::RoundNotStarted => write!(f, "No round has been started"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryUnavailable(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<DictionaryUnavailable> for GameError {
    fn from(err: DictionaryUnavailable) -> Self {
        Self::DictionaryUnavailable(err)
    }
}
