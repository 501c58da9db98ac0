//! Word lists and dictionaries
//!
//! Provides embedded word lists compiled into the binary, file and in-memory
//! sources, and the [`Dictionary`] a round validates guesses against.

mod embedded;
pub mod loader;

pub use loader::{DictionarySource, EmbeddedWords, MemoryWords, WordDirectory};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// No usable word list exists for a word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryUnavailable {
    pub length: usize,
    pub reason: String,
}

impl DictionaryUnavailable {
    #[must_use]
    pub fn new(length: usize, reason: impl Into<String>) -> Self {
        Self {
            length,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DictionaryUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No dictionary for {}-letter words: {}",
            self.length, self.reason
        )
    }
}

impl std::error::Error for DictionaryUnavailable {}

/// Acceptable guesses and candidate targets for one word length
///
/// Every candidate is also an acceptable guess.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    acceptable: FxHashSet<Word>,
    candidates: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-parsed lists
    ///
    /// Words of the wrong length are dropped. Candidates missing from the
    /// acceptable list are added to it.
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if no candidate targets remain.
    pub fn assemble(
        word_length: usize,
        acceptable: impl IntoIterator<Item = Word>,
        candidates: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryUnavailable> {
        let mut acceptable: FxHashSet<Word> = acceptable
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();

        let mut candidates: Vec<Word> = candidates
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        if candidates.is_empty() {
            return Err(DictionaryUnavailable::new(
                word_length,
                "candidate list is empty",
            ));
        }

        for candidate in &candidates {
            if !acceptable.contains(candidate) {
                log::warn!("candidate '{candidate}' missing from acceptable list, adding it");
                acceptable.insert(candidate.clone());
            }
        }

        Ok(Self {
            word_length,
            acceptable,
            candidates,
        })
    }

    /// Load both lists for `word_length` from a source
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if either list is missing or there are
    /// no candidates.
    pub fn load<S: DictionarySource + ?Sized>(
        source: &S,
        word_length: usize,
    ) -> Result<Self, DictionaryUnavailable> {
        let acceptable = source.load_acceptable(word_length)?;
        let candidates = source.load_candidates(word_length)?;
        let dictionary = Self::assemble(word_length, acceptable, candidates)?;

        log::info!(
            "loaded {word_length}-letter dictionary from {}: {} acceptable, {} candidates",
            source.describe(),
            dictionary.acceptable_count(),
            dictionary.candidate_count()
        );

        Ok(dictionary)
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// True if `word` may be submitted as a guess
    #[must_use]
    pub fn is_acceptable(&self, word: &Word) -> bool {
        self.acceptable.contains(word)
    }

    /// True if `word` may be chosen as a target
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        self.candidates.binary_search(word).is_ok()
    }

    /// Candidate targets, sorted
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn acceptable_count(&self) -> usize {
        self.acceptable.len()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Pick a target uniformly at random from the candidates
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.candidates.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn assemble_restores_subset_invariant() {
        let dictionary =
            Dictionary::assemble(5, words(&["crane", "trace"]), words(&["crane", "slate"]))
                .unwrap();

        assert!(dictionary.is_acceptable(&Word::new("slate").unwrap()));
        assert_eq!(dictionary.acceptable_count(), 3);
        assert_eq!(dictionary.candidate_count(), 2);
    }

    #[test]
    fn assemble_drops_wrong_lengths() {
        let dictionary =
            Dictionary::assemble(4, words(&["tree", "trees"]), words(&["moon", "moons"])).unwrap();

        assert_eq!(dictionary.candidate_count(), 1);
        assert!(!dictionary.is_acceptable(&Word::new("trees").unwrap()));
    }

    #[test]
    fn assemble_without_candidates_fails() {
        let err = Dictionary::assemble(6, words(&["planet"]), Vec::new()).unwrap_err();
        assert_eq!(err.length, 6);
    }

    #[test]
    fn load_from_source() {
        let source = MemoryWords::new().with_length(4, &["tree", "moon"], &["moon"]);
        let dictionary = Dictionary::load(&source, 4).unwrap();

        assert_eq!(dictionary.word_length(), 4);
        assert!(dictionary.is_candidate(&Word::new("moon").unwrap()));
        assert!(!dictionary.is_candidate(&Word::new("tree").unwrap()));
        assert!(Dictionary::load(&source, 5).is_err());
    }

    #[test]
    fn choose_target_comes_from_candidates() {
        let dictionary = Dictionary::load(&EmbeddedWords, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = dictionary.choose_target(&mut rng).unwrap();
            assert_eq!(target.len(), 6);
            assert!(dictionary.is_candidate(target));
            assert!(dictionary.is_acceptable(target));
        }
    }

    #[test]
    fn unavailable_display_names_length() {
        let err = DictionaryUnavailable::new(9, "no embedded candidate list");
        assert_eq!(
            err.to_string(),
            "No dictionary for 9-letter words: no embedded candidate list"
        );
    }
}
