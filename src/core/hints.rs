//! Keyboard hints
//!
//! Cumulative best-known feedback for each letter A-Z over one round.

use super::Feedback;

const ALPHABET_SIZE: usize = 26;

/// Best-known feedback per letter
///
/// A letter with no feedback yet has no entry. Recorded hints only move to a
/// higher-precedence value (Exact > Present > Absent), never down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardHints {
    letters: [Option<Feedback>; ALPHABET_SIZE],
}

impl KeyboardHints {
    /// Create an empty hint table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `feedback` for an uppercase ASCII letter
    ///
    /// Non-letters are ignored. Returns true if the stored hint changed.
    pub fn record(&mut self, letter: u8, feedback: Feedback) -> bool {
        let Some(slot) = Self::slot(letter).map(|i| &mut self.letters[i]) else {
            return false;
        };

        match *slot {
            Some(current) if !feedback.outranks(current) => false,
            _ => {
                *slot = Some(feedback);
                true
            }
        }
    }

    /// Fold one evaluated guess into the table
    pub fn record_guess(&mut self, letters: &[u8], feedback: &[Feedback]) {
        for (&letter, &fb) in letters.iter().zip(feedback) {
            self.record(letter, fb);
        }
    }

    /// Best-known feedback for a letter, if any
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Feedback> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(Self::slot)
            .and_then(|i| self.letters[i])
    }

    /// Iterate over letters that have a hint, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        self.letters
            .iter()
            .zip(b'A'..=b'Z')
            .filter_map(|(hint, letter)| hint.map(|fb| (char::from(letter), fb)))
    }

    /// Number of letters with a hint
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.iter().filter(|hint| hint.is_some()).count()
    }

    /// True if no letter has a hint yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}
