//! Per-letter feedback and guess evaluation
//!
//! Each guessed letter is scored against the target as one of:
//! - Exact: right letter, right position
//! - Present: letter occurs in the target at another position
//! - Absent: letter does not occur in the target
//!
//! Two evaluation rules are provided. [`EvaluationRule::Membership`] is the
//! game's default: a letter is Present whenever it occurs anywhere in the
//! target, so a repeated guess letter can be Present at several positions even
//! if the target holds it only once. [`EvaluationRule::Strict`] reserves target
//! occurrences, matching the rule used by the newspaper game.

use super::Word;

/// Feedback for a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter in the right position
    Exact,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter is not in the target
    Absent,
}

impl Feedback {
    /// Precedence used by keyboard hints: Exact > Present > Absent
    #[inline]
    const fn precedence(self) -> u8 {
        match self {
            Self::Exact => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }

    /// True if `self` should replace `other` as a letter's best-known hint
    #[inline]
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.precedence() > other.precedence()
    }

    /// Emoji tile for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Rule used to grant Present feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationRule {
    /// Present if the letter occurs anywhere in the target
    #[default]
    Membership,
    /// Present only while unreserved occurrences of the letter remain
    Strict,
}

/// Evaluate `guess` against `target`, one feedback per position
///
/// Both words must have the same length; the round guarantees this before
/// calling.
///
/// # Examples
/// ```
/// use wordle_clone::core::{EvaluationRule, Feedback, Word, evaluate};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target, EvaluationRule::Membership),
///     vec![
///         Feedback::Absent,
///         Feedback::Exact,
///         Feedback::Exact,
///         Feedback::Present,
///         Feedback::Exact,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word, rule: EvaluationRule) -> Vec<Feedback> {
    debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

    match rule {
        EvaluationRule::Membership => evaluate_membership(guess, target),
        EvaluationRule::Strict => evaluate_strict(guess, target),
    }
}

fn evaluate_membership(guess: &Word, target: &Word) -> Vec<Feedback> {
    guess
        .letters()
        .iter()
        .zip(target.letters())
        .map(|(&g, &t)| {
            if g == t {
                Feedback::Exact
            } else if target.has_letter(g) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect()
}

fn evaluate_strict(guess: &Word, target: &Word) -> Vec<Feedback> {
    let mut result = vec![Feedback::Absent; guess.len()];
    let mut target_available = target.char_counts();

    // First pass: exact matches reserve their target letter
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            result[i] = Feedback::Exact;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters take from what is left
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Feedback::Exact {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            result[i] = Feedback::Present;
            *count -= 1;
        }
    }

    result
}
