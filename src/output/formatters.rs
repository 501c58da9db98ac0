//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardHints};
use colored::{ColoredString, Colorize};

/// QWERTY rows used to lay out keyboard hints
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a feedback row as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &[Feedback]) -> String {
    feedback.iter().map(|fb| fb.to_emoji()).collect()
}

/// A letter tile coloured by its feedback
#[must_use]
pub fn tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {letter} ");
    match feedback {
        Some(Feedback::Exact) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// One board row: submitted letters with their feedback
#[must_use]
pub fn format_guess_row(letters: &str, feedback: &[Feedback]) -> String {
    letters
        .chars()
        .zip(feedback)
        .map(|(letter, &fb)| tile(letter, Some(fb)).to_string())
        .collect()
}

/// One board row being typed, padded with blanks to `width`
#[must_use]
pub fn format_open_row(letters: &str, width: usize) -> String {
    let typed = letters.chars().map(|letter| tile(letter, None).to_string());
    let blanks = (letters.len()..width).map(|_| " _ ".dimmed().to_string());
    typed.chain(blanks).collect()
}

/// Keyboard row with each letter coloured by its hint
#[must_use]
pub fn format_keyboard_row(row: &str, hints: &KeyboardHints) -> String {
    row.chars()
        .map(|letter| {
            let key = letter.to_string();
            match hints.get(letter) {
                Some(Feedback::Exact) => key.green().bold().to_string(),
                Some(Feedback::Present) => key.yellow().bold().to_string(),
                Some(Feedback::Absent) => key.bright_black().to_string(),
                None => key.normal().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
