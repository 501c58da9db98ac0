//! Game engine
//!
//! Configuration, round state machine and the engine controller that front
//! ends drive one player action at a time.

mod config;
mod engine;
mod error;
mod round;
mod stats;

pub use config::{
    DEFAULT_GUESS_ALLOWANCE, DEFAULT_WORD_LENGTH, GUESS_ALLOWANCES, GameConfig,
    MAX_GUESS_ALLOWANCE, WORD_LENGTHS,
};
pub use engine::Engine;
pub use error::{Advisory, GameError, Parameter};
pub use round::{Round, RoundOutcome, Submission};
pub use stats::Statistics;
