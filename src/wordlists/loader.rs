//! Word list sources
//!
//! A [`DictionarySource`] supplies the raw acceptable and candidate lists for a
//! word length. Three sources are provided: the embedded lists, a directory of
//! plain-text files, and caller-supplied in-memory lists.

use super::{DictionaryUnavailable, embedded};
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can produce word lists per word length
pub trait DictionarySource {
    /// Words accepted as guesses
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if no list exists for `length`.
    fn load_acceptable(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable>;

    /// Words that may be chosen as the target
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if no list exists for `length`.
    fn load_candidates(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable>;

    /// Short human-readable description of where the words come from
    fn describe(&self) -> String;
}

/// Parse a newline-delimited word list
///
/// Lines are trimmed and uppercased. Blank lines are skipped; lines that are
/// not a single word of `length` letters are skipped with a warning.
/// Duplicates are removed and the result is sorted.
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n Slate \n\nno way\ntoolong\n", 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<Word> {
    words_from_lines(content.lines(), length)
}

/// Convert string slices to sorted, de-duplicated words of `length` letters
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    let mut words: Vec<Word> = lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) if word.len() == length => Some(word),
            Ok(word) => {
                log::warn!(
                    "skipping '{word}': expected {length} letters, got {}",
                    word.len()
                );
                None
            }
            Err(e) => {
                log::warn!("skipping '{}': {e}", line.trim());
                None
            }
        })
        .collect();

    words.sort_unstable();
    words.dedup();
    words
}

/// Word lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl DictionarySource for EmbeddedWords {
    fn load_acceptable(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        embedded::acceptable(length)
            .map(|list| words_from_slice(list, length))
            .ok_or_else(|| DictionaryUnavailable::new(length, "no embedded acceptable list"))
    }

    fn load_candidates(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        embedded::candidates(length)
            .map(|list| words_from_slice(list, length))
            .ok_or_else(|| DictionaryUnavailable::new(length, "no embedded candidate list"))
    }

    fn describe(&self) -> String {
        "embedded word lists".to_string()
    }
}

/// Word lists read from a directory
///
/// Layout:
/// - `<root>/check_words/<n>_letter_words.txt`: acceptable guesses
/// - `<root>/pick_words/<n>_letter_words.txt`: candidate targets
#[derive(Debug, Clone)]
pub struct WordDirectory {
    root: PathBuf,
}

impl WordDirectory {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the acceptable list for a word length
    #[must_use]
    pub fn acceptable_path(&self, length: usize) -> PathBuf {
        self.root
            .join("check_words")
            .join(format!("{length}_letter_words.txt"))
    }

    /// Path of the candidate list for a word length
    #[must_use]
    pub fn candidates_path(&self, length: usize) -> PathBuf {
        self.root
            .join("pick_words")
            .join(format!("{length}_letter_words.txt"))
    }

    fn read_list(path: &Path, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        let content = fs::read_to_string(path)
            .map_err(|e| DictionaryUnavailable::new(length, format!("{}: {e}", path.display())))?;
        Ok(parse_word_list(&content, length))
    }
}

impl DictionarySource for WordDirectory {
    fn load_acceptable(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        Self::read_list(&self.acceptable_path(length), length)
    }

    fn load_candidates(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        Self::read_list(&self.candidates_path(length), length)
    }

    fn describe(&self) -> String {
        format!("word lists in {}", self.root.display())
    }
}

/// Caller-supplied word lists, keyed by word length
#[derive(Debug, Clone, Default)]
pub struct MemoryWords {
    lists: FxHashMap<usize, (Vec<String>, Vec<String>)>,
}

impl MemoryWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the lists for one word length, replacing any previous ones
    #[must_use]
    pub fn with_length(mut self, length: usize, acceptable: &[&str], candidates: &[&str]) -> Self {
        let owned = |list: &[&str]| list.iter().map(|&s| s.to_string()).collect();
        self.lists
            .insert(length, (owned(acceptable), owned(candidates)));
        self
    }

    fn list(
        &self,
        length: usize,
        pick: impl Fn(&(Vec<String>, Vec<String>)) -> &Vec<String>,
    ) -> Result<Vec<Word>, DictionaryUnavailable> {
        self.lists
            .get(&length)
            .map(|lists| words_from_lines(pick(lists).iter().map(String::as_str), length))
            .ok_or_else(|| DictionaryUnavailable::new(length, "no in-memory list"))
    }
}

impl DictionarySource for MemoryWords {
    fn load_acceptable(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        self.list(length, |(acceptable, _)| acceptable)
    }

    fn load_candidates(&self, length: usize) -> Result<Vec<Word>, DictionaryUnavailable> {
        self.list(length, |(_, candidates)| candidates)
    }

    fn describe(&self) -> String {
        let mut lengths: Vec<usize> = self.lists.keys().copied().collect();
        lengths.sort_unstable();
        format!("in-memory word lists for lengths {lengths:?}")
    }
}
