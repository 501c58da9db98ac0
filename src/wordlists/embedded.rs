//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one acceptable list and
//! one candidate list per supported word length.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Embedded acceptable guesses for a word length
#[must_use]
pub fn acceptable(length: usize) -> Option<&'static [&'static str]> {
    match length {
        4 => Some(ACCEPTABLE_4),
        5 => Some(ACCEPTABLE_5),
        6 => Some(ACCEPTABLE_6),
        7 => Some(ACCEPTABLE_7),
        _ => None,
    }
}

/// Embedded candidate targets for a word length
#[must_use]
pub fn candidates(length: usize) -> Option<&'static [&'static str]> {
    match length {
        4 => Some(CANDIDATES_4),
        5 => Some(CANDIDATES_5),
        6 => Some(CANDIDATES_6),
        7 => Some(CANDIDATES_7),
        _ => None,
    }
}
