//! Dictionary check command
//!
//! Loads every supported word length from a source and reports what it found.

use crate::game::WORD_LENGTHS;
use crate::wordlists::{Dictionary, DictionarySource, DictionaryUnavailable};

/// Word counts of one loaded dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCounts {
    pub acceptable: usize,
    pub candidates: usize,
}

/// Result of loading the dictionary for one word length
#[derive(Debug, Clone)]
pub struct LengthReport {
    pub word_length: usize,
    pub result: Result<WordCounts, DictionaryUnavailable>,
}

impl LengthReport {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.result.is_ok()
    }
}

/// Load each supported word length and collect the counts
#[must_use]
pub fn check_dictionaries<S: DictionarySource + ?Sized>(source: &S) -> Vec<LengthReport> {
    WORD_LENGTHS
        .map(|word_length| LengthReport {
            word_length,
            result: Dictionary::load(source, word_length).map(|dictionary| WordCounts {
                acceptable: dictionary.acceptable_count(),
                candidates: dictionary.candidate_count(),
            }),
        })
        .collect()
}
