//! Batch self-play against randomly drawn secrets.

use crate::error::Result;
use crate::index::DictionaryIndex;
use crate::session::{GameSession, SecretOracle, SessionConfig, SessionState};
use crate::solver::GuessSelector;
use crate::word::Word;
use crate::MAX_TURNS;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub games: usize,
    /// Game `i` draws its secret and tie-breaks from `seed + i`
    pub seed: u64,
    pub session: SessionConfig,
    /// Play games on the rayon thread pool
    pub parallel: bool,
}

/// Terminal-state tally of a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub games: usize,
    /// `solved[t]` games were solved by guess `t + 1`
    pub solved: [usize; MAX_TURNS],
    pub unsolved: usize,
    pub contradictions: usize,
}

impl BatchSummary {
    pub fn record(&mut self, state: SessionState) {
        self.games += 1;
        match state {
            SessionState::Solved { turn } => self.solved[turn] += 1,
            SessionState::Contradiction => self.contradictions += 1,
            SessionState::Unsolved | SessionState::InProgress { .. } => self.unsolved += 1,
        }
    }

    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.games as f64
    }

    /// Percentage of games solved on guess `turn + 1`
    pub fn solve_rate(&self, turn: usize) -> f64 {
        self.percent(self.solved.get(turn).copied().unwrap_or(0))
    }

    /// Percentage of games not solved, contradictions included
    pub fn unsolved_rate(&self) -> f64 {
        self.percent(self.unsolved + self.contradictions)
    }

    pub fn win_rate(&self) -> f64 {
        self.percent(self.solved.iter().sum())
    }

    /// Mean number of guesses over the solved games
    pub fn average_solution_length(&self) -> Option<f64> {
        let wins: usize = self.solved.iter().sum();
        if wins == 0 {
            return None;
        }
        let guesses: usize = self
            .solved
            .iter()
            .enumerate()
            .map(|(turn, count)| (turn + 1) * count)
            .sum();
        Some(guesses as f64 / wins as f64)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in 0..MAX_TURNS {
            writeln!(f, "Solved in {} moves: {:.1}%", turn + 1, self.solve_rate(turn))?;
        }
        writeln!(f, "Unsolved: {:.1}%", self.unsolved_rate())?;
        match self.average_solution_length() {
            Some(average) => writeln!(f, "Average solution length: {:.3}", average)?,
            None => writeln!(f, "Average solution length: n/a")?,
        }
        write!(f, "Win rate: {:.1}%", self.win_rate())
    }
}

/// Play `config.games` games, each against a secret drawn uniformly from the
/// dictionary.
pub fn run_batch(
    index: &DictionaryIndex,
    selector: &GuessSelector,
    opening: &[Word],
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let play = |game: usize| -> Result<SessionState> {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(game as u64));
        let secret = index.words()[rng.gen_range(0..index.len())];
        let mut session = GameSession::new(index, config.session.clone());
        session.play(selector, opening, &mut SecretOracle::new(secret), &mut rng)
    };

    info!("playing {} games", config.games);
    let states: Vec<SessionState> = if config.parallel {
        (0..config.games).into_par_iter().map(play).collect::<Result<_>>()?
    } else {
        (0..config.games).map(play).collect::<Result<_>>()?
    };

    let mut summary = BatchSummary::default();
    for state in states {
        summary.record(state);
    }
    info!(
        "won {} of {} games",
        summary.solved.iter().sum::<usize>(),
        summary.games
    );
    Ok(summary)
}
