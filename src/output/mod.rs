//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_dictionary_report, write_board, write_keyboard, write_round_summary};
