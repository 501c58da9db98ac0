//! End-of-round scoring

use super::{Feedback, FeedbackGrid};

/// Points per exact cell, multiplied by word length
pub const EXACT_POINTS: i64 = 50;
/// Points per present cell, multiplied by word length
pub const PRESENT_POINTS: i64 = 40;
/// Penalty factor applied to `guesses * (allowance - guesses)`
pub const GUESS_PENALTY: i64 = 30;

/// Score a finished round
///
/// `exact * len * 50 + present * len * 40 - made * (allowance - made) * 30`
///
/// The penalty vanishes when no guesses or every allowed guess was used and
/// peaks around the midpoint. The result is not clamped and may be negative.
///
/// # Examples
/// ```
/// use wordle_clone::core::score;
///
/// // 7 exact, 2 present, 3 of 7 guesses used, 5-letter words
/// assert_eq!(score(7, 2, 5, 3, 7), 1790);
/// ```
#[must_use]
pub fn score(
    exact_count: usize,
    present_count: usize,
    word_length: usize,
    guesses_made: usize,
    guess_allowance: usize,
) -> i64 {
    let length = word_length as i64;
    let made = guesses_made as i64;
    let allowance = guess_allowance as i64;

    (exact_count as i64 * length * EXACT_POINTS)
        + (present_count as i64 * length * PRESENT_POINTS)
        - (made * (allowance - made) * GUESS_PENALTY)
}

/// Score a finished round from its grid
#[must_use]
pub fn score_grid(grid: &FeedbackGrid, guesses_made: usize) -> i64 {
    score(
        grid.count(Feedback::Exact),
        grid.count(Feedback::Present),
        grid.width(),
        guesses_made,
        grid.height(),
    )
}
