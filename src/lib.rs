//! Wordle Clone
//!
//! A word-guessing game: find a hidden word of 4 to 7 letters within 2 to 7
//! guesses, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::game::{Engine, GameConfig, RoundOutcome};
//! use wordle_clone::wordlists::MemoryWords;
//!
//! let source = MemoryWords::new().with_length(5, &["crane", "slate"], &["crane"]);
//! let mut engine = Engine::with_seed(source, GameConfig::default(), 7);
//! engine.start_round().unwrap();
//!
//! for ch in "crane".chars() {
//!     engine.append_letter(ch).unwrap();
//! }
//! let submission = engine.submit_guess().unwrap();
//!
//! assert!(submission.accepted);
//! assert_eq!(engine.outcome(), Some(RoundOutcome::Won));
//! ```

// Core domain types
pub mod core;

// Round lifecycle and configuration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
