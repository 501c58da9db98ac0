//! Round state
//!
//! One playthrough: the target, the submitted guesses, the row being typed,
//! the feedback grid, keyboard hints and the outcome. All of it is created
//! together when a round starts and dropped together when it is replaced.

use super::config::GameConfig;
use super::error::{Advisory, GameError};
use crate::core::{Feedback, FeedbackGrid, KeyboardHints, Word, evaluate, score_grid};
use crate::wordlists::{Dictionary, DictionaryUnavailable};
use rand::Rng;
use std::fmt;
use std::rc::Rc;

/// Status of a started round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    /// True for the terminal states
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// True if the guess was evaluated and took a row
    pub accepted: bool,
    /// Why the guess was rejected
    pub advisory: Option<Advisory>,
    /// Outcome after this submission
    pub outcome: RoundOutcome,
    /// Row written by an accepted guess
    pub row: Option<usize>,
    /// Feedback written by an accepted guess
    pub feedback: Option<Vec<Feedback>>,
}

impl Submission {
    fn accepted(row: usize, feedback: Vec<Feedback>, outcome: RoundOutcome) -> Self {
        Self {
            accepted: true,
            advisory: None,
            outcome,
            row: Some(row),
            feedback: Some(feedback),
        }
    }

    fn rejected(advisory: Advisory, outcome: RoundOutcome) -> Self {
        Self {
            accepted: false,
            advisory: Some(advisory),
            outcome,
            row: None,
            feedback: None,
        }
    }
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    dictionary: Rc<Dictionary>,
    target: Word,
    guesses: Vec<Word>,
    in_progress: String,
    grid: FeedbackGrid,
    hints: KeyboardHints,
    outcome: RoundOutcome,
    next_row: usize,
    score: Option<i64>,
}

impl Round {
    /// Start a round with a target drawn uniformly from the dictionary
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if the dictionary is for a different
    /// word length than `config` or has no candidates.
    pub fn start<R: Rng + ?Sized>(
        config: GameConfig,
        dictionary: Rc<Dictionary>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if dictionary.word_length() != config.word_length() {
            return Err(DictionaryUnavailable::new(
                config.word_length(),
                format!(
                    "dictionary holds {}-letter words",
                    dictionary.word_length()
                ),
            )
            .into());
        }

        let target = dictionary
            .choose_target(rng)
            .cloned()
            .ok_or_else(|| DictionaryUnavailable::new(config.word_length(), "no candidates"))?;

        log::info!(
            "round started: {} letters, {} guesses, {:?} evaluation",
            config.word_length(),
            config.guess_allowance(),
            config.rule()
        );
        log::debug!("chosen target: {target}");

        Ok(Self {
            config,
            dictionary,
            target,
            guesses: Vec::with_capacity(config.guess_allowance()),
            in_progress: String::with_capacity(config.word_length()),
            grid: FeedbackGrid::new(config.guess_allowance(), config.word_length()),
            hints: KeyboardHints::new(),
            outcome: RoundOutcome::InProgress,
            next_row: 0,
            score: None,
        })
    }

    /// Type a letter into the current row
    ///
    /// Ignored once the round has ended and for non-letters.
    ///
    /// # Errors
    /// Returns `MaxLengthReached` if the row is already full; the row is left
    /// unchanged.
    pub fn append_letter(&mut self, ch: char) -> Result<(), Advisory> {
        if self.outcome.is_finished() || !ch.is_ascii_alphabetic() {
            return Ok(());
        }
        if self.in_progress.len() >= self.config.word_length() {
            return Err(Advisory::MaxLengthReached);
        }
        self.in_progress.push(ch.to_ascii_uppercase());
        Ok(())
    }

    /// Delete the last typed letter; no-op on an empty row
    pub fn remove_last_letter(&mut self) {
        if !self.outcome.is_finished() {
            self.in_progress.pop();
        }
    }

    /// Submit the current row
    ///
    /// Checks length, then dictionary membership, then repetition. A rejected
    /// guess leaves the round untouched. An accepted guess is evaluated, its
    /// row and the keyboard hints are written, and the outcome is updated, all
    /// before this returns.
    ///
    /// # Errors
    /// Returns `RoundAlreadyEnded` if the round is won or lost.
    pub fn submit(&mut self) -> Result<Submission, GameError> {
        if self.outcome.is_finished() {
            return Err(GameError::RoundAlreadyEnded);
        }

        log::debug!("submitted word: {}", self.in_progress);

        if self.in_progress.len() != self.config.word_length() {
            return Ok(self.reject(Advisory::TooShort));
        }

        let Ok(guess) = Word::new(&self.in_progress) else {
            return Ok(self.reject(Advisory::NotARecognizedWord));
        };
        if !self.dictionary.is_acceptable(&guess) {
            return Ok(self.reject(Advisory::NotARecognizedWord));
        }
        if self.guesses.contains(&guess) {
            return Ok(self.reject(Advisory::AlreadyGuessed));
        }

        let feedback = evaluate(&guess, &self.target, self.config.rule());
        let row = self.next_row;
        let written = self.grid.fill_row(row, feedback.clone());
        debug_assert!(written, "row {row} was already filled");

        self.hints.record_guess(guess.letters(), &feedback);
        let won = guess == self.target;
        self.guesses.push(guess);
        self.next_row += 1;
        self.in_progress.clear();

        self.outcome = if won {
            RoundOutcome::Won
        } else if self.guesses.len() >= self.config.guess_allowance() {
            RoundOutcome::Lost
        } else {
            RoundOutcome::InProgress
        };

        if self.outcome.is_finished() {
            let score = score_grid(&self.grid, self.guesses.len());
            self.score = Some(score);
            log::info!(
                "round {} after {} guesses, target {}, score {score}",
                self.outcome,
                self.guesses.len(),
                self.target
            );
        }

        Ok(Submission::accepted(row, feedback, self.outcome))
    }

    fn reject(&self, advisory: Advisory) -> Submission {
        log::debug!("rejected '{}': {advisory}", self.in_progress);
        Submission::rejected(advisory, self.outcome)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn in_progress(&self) -> &str {
        &self.in_progress
    }

    #[must_use]
    pub const fn grid(&self) -> &FeedbackGrid {
        &self.grid
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Index of the row the next accepted guess will fill
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.next_row
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.guess_allowance() - self.guesses.len()
    }

    /// Final score, once the round has ended
    #[must_use]
    pub const fn score(&self) -> Option<i64> {
        self.score
    }

    /// The target word, once the round has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.outcome.is_finished().then_some(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EvaluationRule;
    use crate::wordlists::MemoryWords;
    use Feedback::{Absent, Exact, Present};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ACCEPTABLE: &[&str] = &[
        "crane", "trace", "slate", "eerie", "bumpy", "ghost", "plumb", "fjord", "nymph",
    ];

    fn round_with(target: &str, guess_allowance: usize, rule: EvaluationRule) -> Round {
        let source = MemoryWords::new().with_length(5, ACCEPTABLE, &[target]);
        let dictionary = Rc::new(Dictionary::load(&source, 5).unwrap());
        let config = GameConfig::new(5, guess_allowance).unwrap().with_rule(rule);
        Round::start(config, dictionary, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    fn type_word(round: &mut Round, word: &str) {
        for ch in word.chars() {
            round.append_letter(ch).unwrap();
        }
    }

    fn submit_word(round: &mut Round, word: &str) -> Submission {
        type_word(round, word);
        round.submit().unwrap()
    }

    #[test]
    fn starts_empty() {
        let round = round_with("crane", 6, EvaluationRule::Membership);

        assert_eq!(round.outcome(), RoundOutcome::InProgress);
        assert!(round.guesses().is_empty());
        assert_eq!(round.in_progress(), "");
        assert_eq!(round.grid().height(), 6);
        assert_eq!(round.grid().width(), 5);
        assert_eq!(round.grid().filled_rows(), 0);
        assert!(round.hints().is_empty());
        assert_eq!(round.score(), None);
        assert_eq!(round.revealed_target(), None);
    }

    #[test]
    fn start_rejects_mismatched_dictionary() {
        let source = MemoryWords::new().with_length(4, &["tree"], &["tree"]);
        let dictionary = Rc::new(Dictionary::load(&source, 4).unwrap());
        let err = Round::start(
            GameConfig::default(),
            dictionary,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();

        assert!(matches!(err, GameError::DictionaryUnavailable(_)));
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        type_word(&mut round, "slate");

        assert_eq!(round.append_letter('x'), Err(Advisory::MaxLengthReached));
        assert_eq!(round.in_progress(), "SLATE");
    }

    #[test]
    fn typing_ignores_non_letters() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        round.append_letter('1').unwrap();
        round.append_letter(' ').unwrap();
        round.append_letter('c').unwrap();
        assert_eq!(round.in_progress(), "C");
    }

    #[test]
    fn remove_on_empty_is_noop() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        round.remove_last_letter();
        assert_eq!(round.in_progress(), "");

        type_word(&mut round, "cr");
        round.remove_last_letter();
        assert_eq!(round.in_progress(), "C");
    }

    #[test]
    fn trace_against_crane() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        let submission = submit_word(&mut round, "trace");

        assert!(submission.accepted);
        assert_eq!(submission.row, Some(0));
        assert_eq!(submission.outcome, RoundOutcome::InProgress);
        assert_eq!(
            round.grid().row(0),
            Some(&[Absent, Exact, Exact, Present, Exact][..])
        );
        assert_eq!(round.in_progress(), "");
        assert_eq!(round.current_row(), 1);
        assert_eq!(round.remaining_guesses(), 5);
    }

    #[test]
    fn short_guess_rejected_before_dictionary_check() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        type_word(&mut round, "zzz");

        let submission = round.submit().unwrap();
        assert!(!submission.accepted);
        assert_eq!(submission.advisory, Some(Advisory::TooShort));
        assert_eq!(round.in_progress(), "ZZZ");
        assert_eq!(round.current_row(), 0);
    }

    #[test]
    fn unknown_word_rejected() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        let submission = submit_word(&mut round, "zzzzz");

        assert_eq!(submission.advisory, Some(Advisory::NotARecognizedWord));
        assert_eq!(round.grid().filled_rows(), 0);
        assert!(round.hints().is_empty());
    }

    #[test]
    fn repeated_guess_does_not_consume_row() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        submit_word(&mut round, "trace");
        let submission = submit_word(&mut round, "trace");

        assert!(!submission.accepted);
        assert_eq!(submission.advisory, Some(Advisory::AlreadyGuessed));
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.current_row(), 1);
        assert_eq!(round.grid().filled_rows(), 1);
    }

    #[test]
    fn exact_guess_wins() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        submit_word(&mut round, "slate");
        let submission = submit_word(&mut round, "crane");

        assert_eq!(submission.outcome, RoundOutcome::Won);
        assert_eq!(submission.feedback, Some(vec![Exact; 5]));
        assert_eq!(round.revealed_target().map(Word::text), Some("CRANE"));
        assert!(round.score().is_some());
    }

    #[test]
    fn exhausting_guesses_loses() {
        let mut round = round_with("crane", 2, EvaluationRule::Membership);
        submit_word(&mut round, "ghost");
        let submission = submit_word(&mut round, "bumpy");

        assert_eq!(submission.outcome, RoundOutcome::Lost);
        assert_eq!(round.remaining_guesses(), 0);
        assert_eq!(round.submit(), Err(GameError::RoundAlreadyEnded));
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let mut round = round_with("crane", 2, EvaluationRule::Membership);
        submit_word(&mut round, "ghost");
        assert_eq!(submit_word(&mut round, "crane").outcome, RoundOutcome::Won);
    }

    #[test]
    fn ended_round_ignores_typing() {
        let mut round = round_with("crane", 2, EvaluationRule::Membership);
        submit_word(&mut round, "crane");

        assert_eq!(round.append_letter('a'), Ok(()));
        assert_eq!(round.in_progress(), "");
    }

    #[test]
    fn score_is_computed_on_termination() {
        // 2 of 7 guesses: TRACE (3 exact, 1 present) then CRANE (5 exact)
        let mut round = round_with("crane", 7, EvaluationRule::Membership);
        submit_word(&mut round, "trace");
        assert_eq!(round.score(), None);
        submit_word(&mut round, "crane");

        assert_eq!(round.score(), Some(8 * 5 * 50 + 5 * 40 - 2 * 5 * 30));
    }

    #[test]
    fn hints_never_downgrade() {
        let mut round = round_with("crane", 6, EvaluationRule::Membership);
        submit_word(&mut round, "trace");
        assert_eq!(round.hints().get('R'), Some(Exact));

        // SLATE has no R; the A is exact again and E stays exact
        submit_word(&mut round, "slate");
        assert_eq!(round.hints().get('R'), Some(Exact));
        assert_eq!(round.hints().get('C'), Some(Present));
        assert_eq!(round.hints().get('S'), Some(Absent));
    }

    #[test]
    fn strict_rule_flows_through_round() {
        let mut round = round_with("crane", 6, EvaluationRule::Strict);
        submit_word(&mut round, "eerie");
        assert_eq!(
            round.grid().row(0),
            Some(&[Absent, Absent, Present, Absent, Exact][..])
        );
    }
}
