//! Core domain types for the word-guessing game
//!
//! Pure, testable types with no I/O: words, feedback evaluation, the feedback
//! grid, keyboard hints and scoring.

mod feedback;
mod grid;
mod hints;
mod score;
mod word;

pub use feedback::{EvaluationRule, Feedback, evaluate};
pub use grid::FeedbackGrid;
pub use hints::KeyboardHints;
pub use score::{EXACT_POINTS, GUESS_PENALTY, PRESENT_POINTS, score, score_grid};
pub use word::{Word, WordError};
