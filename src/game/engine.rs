//! Game engine
//!
//! The single controller front ends talk to. It owns the configuration, the
//! per-length dictionary cache and at most one round, and applies each player
//! action as one synchronous step. Callers sharing an engine must serialize
//! whole actions.

use super::config::GameConfig;
use super::error::{Advisory, GameError};
use super::round::{Round, RoundOutcome, Submission};
use crate::core::{EvaluationRule, FeedbackGrid, KeyboardHints};
use crate::wordlists::{Dictionary, DictionarySource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Word-guessing game controller
pub struct Engine<S: DictionarySource> {
    source: S,
    config: GameConfig,
    dictionaries: FxHashMap<usize, Rc<Dictionary>>,
    round: Option<Round>,
    rng: StdRng,
}

impl<S: DictionarySource> Engine<S> {
    /// Create an engine with an OS-seeded random generator
    #[must_use]
    pub fn new(source: S, config: GameConfig) -> Self {
        Self::with_rng(source, config, StdRng::from_os_rng())
    }

    /// Create an engine whose target selection is reproducible
    #[must_use]
    pub fn with_seed(source: S, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(source, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: S, config: GameConfig, rng: StdRng) -> Self {
        Self {
            source,
            config,
            dictionaries: FxHashMap::default(),
            round: None,
            rng,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// True while a round is in progress; configuration is locked then
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.outcome() == Some(RoundOutcome::InProgress)
    }

    fn ensure_unlocked(&self) -> Result<(), GameError> {
        if self.is_locked() {
            Err(GameError::ConfigurationLocked)
        } else {
            Ok(())
        }
    }

    /// Set both parameters at once; nothing changes unless both are valid
    ///
    /// # Errors
    /// `ConfigurationLocked` during a round, `InvalidConfiguration` for an
    /// out-of-range value.
    pub fn configure(&mut self, word_length: usize, guess_allowance: usize) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        let mut config = self.config;
        config.set_word_length(word_length)?;
        config.set_guess_allowance(guess_allowance)?;
        self.config = config;
        Ok(())
    }

    /// # Errors
    /// `ConfigurationLocked` during a round, `InvalidConfiguration` for an
    /// out-of-range value.
    pub fn set_word_length(&mut self, n: usize) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        self.config.set_word_length(n)
    }

    /// # Errors
    /// `ConfigurationLocked` during a round, `InvalidConfiguration` for an
    /// out-of-range value.
    pub fn set_guess_allowance(&mut self, n: usize) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        self.config.set_guess_allowance(n)
    }

    /// # Errors
    /// `ConfigurationLocked` during a round.
    pub fn set_rule(&mut self, rule: EvaluationRule) -> Result<(), GameError> {
        self.ensure_unlocked()?;
        self.config.set_rule(rule);
        Ok(())
    }

    /// Dictionary for a word length, loaded on first use and cached
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if the source has no lists for it.
    pub fn dictionary(&mut self, word_length: usize) -> Result<Rc<Dictionary>, GameError> {
        if let Some(dictionary) = self.dictionaries.get(&word_length) {
            return Ok(Rc::clone(dictionary));
        }

        let dictionary = Rc::new(Dictionary::load(&self.source, word_length)?);
        self.dictionaries
            .insert(word_length, Rc::clone(&dictionary));
        Ok(dictionary)
    }

    /// Start a new round with the current configuration
    ///
    /// Any previous round is discarded. On error the previous round is kept.
    ///
    /// # Errors
    /// Returns `DictionaryUnavailable` if no word list exists for the
    /// configured length.
    pub fn start_round(&mut self) -> Result<&Round, GameError> {
        let dictionary = self.dictionary(self.config.word_length())?;
        let round = Round::start(self.config, dictionary, &mut self.rng)?;
        Ok(self.round.insert(round))
    }

    /// Discard the current round and go back to configuration
    pub fn return_to_menu(&mut self) {
        if self.round.take().is_some() {
            log::info!("returned to menu");
        }
    }

    /// Type a letter; ignored when no round is in progress
    ///
    /// # Errors
    /// Returns `MaxLengthReached` if the current row is full.
    pub fn append_letter(&mut self, ch: char) -> Result<(), Advisory> {
        match self.round.as_mut() {
            Some(round) => round.append_letter(ch),
            None => Ok(()),
        }
    }

    /// Delete the last typed letter; no-op when there is none
    pub fn remove_last_letter(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.remove_last_letter();
        }
    }

    /// Submit the typed row
    ///
    /// # Errors
    /// `RoundNotStarted` without a round, `RoundAlreadyEnded` after a win or
    /// loss.
    pub fn submit_guess(&mut self) -> Result<Submission, GameError> {
        self.round
            .as_mut()
            .ok_or(GameError::RoundNotStarted)?
            .submit()
    }

    /// Current round, if one has been started
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Outcome of the current round; `None` before a round starts
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.round.as_ref().map(Round::outcome)
    }

    /// Read-only view of the feedback grid
    #[must_use]
    pub fn feedback_grid(&self) -> Option<&FeedbackGrid> {
        self.round.as_ref().map(Round::grid)
    }

    /// Copy of the keyboard hints; empty before a round starts
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        self.round
            .as_ref()
            .map(|round| *round.hints())
            .unwrap_or_default()
    }

    /// Score of the ended round; `None` while in progress or not started
    #[must_use]
    pub fn score(&self) -> Option<i64> {
        self.round.as_ref().and_then(Round::score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::error::Parameter;
    use crate::wordlists::{EmbeddedWords, MemoryWords};

    fn single_target_engine() -> Engine<MemoryWords> {
        let source = MemoryWords::new()
            .with_length(5, &["crane", "trace", "slate", "ghost"], &["crane"])
            .with_length(4, &["tree", "moon"], &["moon"]);
        Engine::with_seed(source, GameConfig::new(5, 3).unwrap(), 42)
    }

    fn play(engine: &mut Engine<MemoryWords>, word: &str) -> Submission {
        for ch in word.chars() {
            engine.append_letter(ch).unwrap();
        }
        engine.submit_guess().unwrap()
    }

    #[test]
    fn not_started_state() {
        let mut engine = single_target_engine();

        assert_eq!(engine.outcome(), None);
        assert!(engine.feedback_grid().is_none());
        assert!(engine.keyboard_hints().is_empty());
        assert_eq!(engine.score(), None);
        assert_eq!(engine.append_letter('a'), Ok(()));
        engine.remove_last_letter();
        assert_eq!(engine.submit_guess(), Err(GameError::RoundNotStarted));
    }

    #[test]
    fn configuration_locked_during_round() {
        let mut engine = single_target_engine();
        engine.start_round().unwrap();

        assert_eq!(engine.configure(4, 4), Err(GameError::ConfigurationLocked));
        assert_eq!(engine.set_word_length(4), Err(GameError::ConfigurationLocked));
        assert_eq!(engine.set_guess_allowance(4), Err(GameError::ConfigurationLocked));
        assert_eq!(
            engine.set_rule(EvaluationRule::Strict),
            Err(GameError::ConfigurationLocked)
        );
        assert_eq!(engine.config().word_length(), 5);
    }

    #[test]
    fn configuration_unlocks_after_round_ends() {
        let mut engine = single_target_engine();
        engine.start_round().unwrap();
        play(&mut engine, "crane");

        assert_eq!(engine.configure(4, 2), Ok(()));
        assert_eq!(engine.outcome(), Some(RoundOutcome::Won));

        let round = engine.start_round().unwrap();
        assert_eq!(round.config().word_length(), 4);
        assert_eq!(round.grid().height(), 2);
        assert_eq!(engine.outcome(), Some(RoundOutcome::InProgress));
        assert_eq!(engine.score(), None);
    }

    #[test]
    fn configure_is_all_or_nothing() {
        let mut engine = single_target_engine();
        let err = engine.configure(4, 9).unwrap_err();

        assert!(matches!(
            err,
            GameError::InvalidConfiguration {
                parameter: Parameter::GuessAllowance,
                value: 9,
                ..
            }
        ));
        assert_eq!(engine.config().word_length(), 5);
        assert_eq!(engine.config().guess_allowance(), 3);
    }

    #[test]
    fn missing_dictionary_aborts_start() {
        let mut engine = single_target_engine();
        engine.configure(6, 3).unwrap();

        assert!(matches!(
            engine.start_round(),
            Err(GameError::DictionaryUnavailable(_))
        ));
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn dictionary_is_cached_per_length() {
        let mut engine = single_target_engine();
        let first = engine.dictionary(5).unwrap();
        let second = engine.dictionary(5).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn return_to_menu_discards_round() {
        let mut engine = single_target_engine();
        engine.start_round().unwrap();
        engine.append_letter('c').unwrap();

        engine.return_to_menu();
        assert_eq!(engine.outcome(), None);
        assert!(!engine.is_locked());
        assert_eq!(engine.configure(4, 7), Ok(()));
    }

    #[test]
    fn new_round_resets_hints_and_guesses() {
        let mut engine = single_target_engine();
        engine.start_round().unwrap();
        play(&mut engine, "trace");
        assert!(!engine.keyboard_hints().is_empty());

        let round = engine.start_round().unwrap();
        assert!(round.guesses().is_empty());
        assert!(round.hints().is_empty());
        assert!(engine.keyboard_hints().is_empty());
    }

    #[test]
    fn loss_then_round_already_ended() {
        let mut engine = single_target_engine();
        engine.start_round().unwrap();
        play(&mut engine, "trace");
        play(&mut engine, "slate");
        let last = play(&mut engine, "ghost");

        assert_eq!(last.outcome, RoundOutcome::Lost);
        assert!(engine.score().is_some());
        assert_eq!(engine.submit_guess(), Err(GameError::RoundAlreadyEnded));
        assert_eq!(
            engine.round().and_then(Round::revealed_target).map(|w| w.text()),
            Some("CRANE")
        );
    }

    #[test]
    fn embedded_rounds_for_every_configuration() {
        let mut engine = Engine::with_seed(EmbeddedWords, GameConfig::default(), 3);

        for length in crate::game::WORD_LENGTHS {
            let dictionary = engine.dictionary(length).unwrap();
            for allowance in crate::game::GUESS_ALLOWANCES {
                engine.configure(length, allowance).unwrap();
                let round = engine.start_round().unwrap();
                assert_eq!(round.grid().height(), allowance);
                assert_eq!(round.grid().width(), length);

                // Guess candidates until the round ends so the target is revealed
                for word in dictionary.candidates() {
                    if engine.outcome() != Some(RoundOutcome::InProgress) {
                        break;
                    }
                    for ch in word.text().chars() {
                        engine.append_letter(ch).unwrap();
                    }
                    assert!(engine.submit_guess().unwrap().accepted);
                }

                let target = engine
                    .round()
                    .and_then(Round::revealed_target)
                    .unwrap()
                    .clone();
                assert_eq!(target.len(), length);
                assert!(dictionary.is_candidate(&target));
                assert!(dictionary.is_acceptable(&target));
                engine.return_to_menu();
            }
        }
    }
}
