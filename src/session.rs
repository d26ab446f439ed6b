//! A single game: guess, receive feedback, narrow the pool, until the game
//! is solved, contradicted or out of turns.

use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::index::DictionaryIndex;
use crate::pool::CandidatePool;
use crate::solver::GuessSelector;
use crate::word::Word;
use crate::MAX_TURNS;
use log::{debug, warn};
use rand::Rng;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for the guess of `turn` (0-indexed)
    InProgress { turn: usize },
    /// The guess of `turn` (0-indexed) was the secret
    Solved { turn: usize },
    /// No dictionary word is consistent with the feedback received
    Contradiction,
    /// Every turn was used without finding the secret
    Unsolved,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::InProgress { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Restrict guesses to the candidate pool
    pub hard_mode: bool,
    /// Guess this word first instead of searching
    pub opening: Option<Word>,
}

/// Source of feedback for a guess: a person at a prompt, or a known secret.
pub trait FeedbackOracle {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern>;
}

impl<F> FeedbackOracle for F
where
    F: FnMut(&Word) -> Result<FeedbackPattern>,
{
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        self(guess)
    }
}

/// Answers by comparing against a known secret, for self-play.
#[derive(Debug, Clone, Copy)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    pub fn new(secret: Word) -> Self {
        Self { secret }
    }
}

impl FeedbackOracle for SecretOracle {
    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        Ok(FeedbackPattern::calculate(guess, &self.secret))
    }
}

#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    index: &'a DictionaryIndex,
    config: SessionConfig,
    pool: CandidatePool,
    state: SessionState,
    history: Vec<(Word, FeedbackPattern)>,
}

impl<'a> GameSession<'a> {
    pub fn new(index: &'a DictionaryIndex, config: SessionConfig) -> Self {
        Self {
            index,
            config,
            pool: CandidatePool::new(index),
            state: SessionState::InProgress { turn: 0 },
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of guesses submitted so far
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Words the next guess may be drawn from
    pub fn guess_set(&self) -> Cow<'_, [Word]> {
        if self.config.hard_mode {
            Cow::Owned(self.pool.sorted())
        } else {
            Cow::Borrowed(self.index.words())
        }
    }

    /// Start over with the full dictionary.
    pub fn reset(&mut self) {
        self.pool = CandidatePool::new(self.index);
        self.state = SessionState::InProgress { turn: 0 };
        self.history.clear();
    }

    /// The guess for the current turn. `opening` is the first-guess
    /// shortlist, consulted on turn 0 only.
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        selector: &GuessSelector,
        opening: &[Word],
        rng: &mut R,
    ) -> Result<Option<Word>> {
        let turn = match self.state {
            SessionState::InProgress { turn } => turn,
            _ => return Err(Error::SessionFinished),
        };
        if turn == 0 {
            if let Some(word) = self.config.opening {
                return Ok(Some(word));
            }
        }
        Ok(selector.choose(
            self.index,
            &self.pool,
            &self.guess_set(),
            turn,
            opening,
            rng,
        ))
    }

    /// Record the feedback received for `guess` and advance the game.
    pub fn submit(&mut self, guess: Word, pattern: FeedbackPattern) -> Result<SessionState> {
        let turn = match self.state {
            SessionState::InProgress { turn } => turn,
            _ => return Err(Error::SessionFinished),
        };
        self.history.push((guess, pattern));

        self.state = if pattern.is_win() {
            SessionState::Solved { turn }
        } else {
            let eliminated = self.pool.apply(self.index, &pattern.atoms(&guess));
            debug!(
                "turn {}: {} {} eliminated {} words, {} left",
                turn + 1,
                guess,
                pattern,
                eliminated,
                self.pool.len()
            );
            if self.pool.is_empty() {
                warn!("no dictionary word matches the feedback received");
                SessionState::Contradiction
            } else if turn + 1 >= MAX_TURNS {
                SessionState::Unsolved
            } else {
                SessionState::InProgress { turn: turn + 1 }
            }
        };
        Ok(self.state)
    }

    /// Play until a terminal state, asking `oracle` for each guess's feedback.
    pub fn play<O, R>(
        &mut self,
        selector: &GuessSelector,
        opening: &[Word],
        oracle: &mut O,
        rng: &mut R,
    ) -> Result<SessionState>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        while !self.state.is_terminal() {
            let guess = match self.next_guess(selector, opening, rng)? {
                Some(guess) => guess,
                None => {
                    self.state = SessionState::Contradiction;
                    break;
                }
            };
            let pattern = oracle.feedback(&guess)?;
            self.submit(guess, pattern)?;
        }
        Ok(self.state)
    }
}
