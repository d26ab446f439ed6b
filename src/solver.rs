//! Guess selection by expected remaining pool size.
//!
//! For every candidate guess the live pool is partitioned by the feedback
//! pattern each possible secret would produce. A pattern seen `f` times
//! leaves the pool members consistent with its atoms, so the guess scores
//!
//! ```text
//! expected_remaining = Σ remaining(pattern) × f(pattern) / |pool|
//! ```
//!
//! and the lowest score wins. The all-hit pattern ends the game and
//! contributes nothing. Patterns are visited most frequent first, so a guess
//! that cannot beat the current best is abandoned early.

use crate::feedback::FeedbackPattern;
use crate::index::DictionaryIndex;
use crate::pool::CandidatePool;
use crate::word::Word;
use crate::MAX_TURNS;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::BinaryHeap;

/// Tuning for the guess search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Tolerance, in expected remaining words, above the best score before a
    /// guess is abandoned. `f64::INFINITY` disables pruning.
    pub epsilon: f64,
    /// Score guesses on the rayon thread pool
    pub parallel: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            parallel: true,
        }
    }
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    config: SelectorConfig,
}

/// A fully scored guess. `total` is Σ remaining × frequency, kept integral
/// so that ties are exact.
#[derive(Debug, Clone, Copy)]
struct Scored {
    word: Word,
    total: u64,
}

/// Running state of one (shard of a) search: every guess scored in full,
/// plus the `keep` lowest totals seen so far, which bound the pruning.
struct Search {
    keep: usize,
    lowest: BinaryHeap<u64>,
    scored: Vec<Scored>,
    pruned: usize,
}

impl Search {
    fn new(keep: usize) -> Self {
        Self {
            keep: keep.max(1),
            lowest: BinaryHeap::new(),
            scored: Vec::new(),
            pruned: 0,
        }
    }

    /// The total a guess must stay under to possibly make the cut
    fn bound(&self) -> Option<u64> {
        if self.lowest.len() < self.keep {
            return None;
        }
        self.lowest.peek().copied()
    }

    fn record(&mut self, scored: Scored) {
        self.lowest.push(scored.total);
        if self.lowest.len() > self.keep {
            self.lowest.pop();
        }
        self.scored.push(scored);
    }

    fn merge(mut self, other: Search) -> Self {
        for total in other.lowest {
            self.lowest.push(total);
            if self.lowest.len() > self.keep {
                self.lowest.pop();
            }
        }
        self.scored.extend(other.scored);
        self.pruned += other.pruned;
        self
    }
}

impl GuessSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Choose the next guess.
    ///
    /// On turn 0 a non-empty `opening` shortlist is used directly. With two
    /// or fewer candidates left, or on the final turn, a pool member is
    /// guessed. Otherwise every word of `guesses` is scored and one of the
    /// minimizers is drawn from `rng`.
    ///
    /// Returns `None` only if the pool (or, past the shortcuts, `guesses`) is
    /// empty.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        index: &DictionaryIndex,
        pool: &CandidatePool,
        guesses: &[Word],
        turn: usize,
        opening: &[Word],
        rng: &mut R,
    ) -> Option<Word> {
        if pool.is_empty() {
            return None;
        }
        if turn == 0 {
            if let Some(&word) = opening.choose(rng) {
                return Some(word);
            }
        }
        if pool.len() <= 2 || turn + 1 >= MAX_TURNS {
            return pool.sorted().choose(rng).copied();
        }

        let scored = self.search(index, pool, guesses, 1);
        let best = scored.first()?.total;
        let minimizers: Vec<Word> = scored
            .iter()
            .take_while(|s| s.total == best)
            .map(|s| s.word)
            .collect();
        debug!(
            "{} guesses tie at expected remaining {:.3}",
            minimizers.len(),
            best as f64 / pool.len() as f64
        );
        minimizers.choose(rng).copied()
    }

    /// The `n` best guesses out of `guesses`, most favorable first. Equal
    /// scores prefer possible answers, then word order.
    pub fn rank(
        &self,
        index: &DictionaryIndex,
        pool: &CandidatePool,
        guesses: &[Word],
        n: usize,
    ) -> Vec<GuessAnalysis> {
        if pool.is_empty() || n == 0 {
            return vec![];
        }
        let mut ranked: Vec<GuessAnalysis> = self
            .search(index, pool, guesses, n)
            .into_iter()
            .map(|s| GuessAnalysis {
                word: s.word,
                expected_remaining: s.total as f64 / pool.len() as f64,
                is_possible_answer: pool.contains(&s.word),
            })
            .collect();
        // totals are already ascending; only reorder within ties
        ranked.sort_by(|a, b| {
            a.expected_remaining
                .total_cmp(&b.expected_remaining)
                .then(b.is_possible_answer.cmp(&a.is_possible_answer))
                .then(a.word.cmp(&b.word))
        });
        ranked.truncate(n);
        ranked
    }

    /// Expected pool size after guessing `guess`, without pruning.
    pub fn expected_remaining(
        &self,
        index: &DictionaryIndex,
        pool: &CandidatePool,
        guess: &Word,
    ) -> f64 {
        if pool.is_empty() {
            return 0.0;
        }
        self.score(index, pool, guess, None)
            .map_or(f64::INFINITY, |total| total as f64 / pool.len() as f64)
    }

    /// Pool members grouped by the pattern `guess` would produce, most
    /// frequent first. The winning pattern is left out.
    pub fn partition(pool: &CandidatePool, guess: &Word) -> Vec<(FeedbackPattern, usize)> {
        let mut counts = [0usize; FeedbackPattern::NUM_PATTERNS];
        for secret in pool.words() {
            counts[FeedbackPattern::calculate(guess, secret).0 as usize] += 1;
        }
        let mut histogram: Vec<(FeedbackPattern, usize)> = counts
            .iter()
            .enumerate()
            .filter(|&(pattern, &count)| {
                count > 0 && pattern != FeedbackPattern::ALL_HIT.0 as usize
            })
            .map(|(pattern, &count)| (FeedbackPattern(pattern as u8), count))
            .collect();
        histogram.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        histogram
    }

    /// Σ remaining × frequency for `guess`, or `None` once the running sum
    /// exceeds `bound` by more than the configured tolerance.
    fn score(
        &self,
        index: &DictionaryIndex,
        pool: &CandidatePool,
        guess: &Word,
        bound: Option<u64>,
    ) -> Option<u64> {
        let limit = bound.map(|b| b as f64 + self.config.epsilon * pool.len() as f64);
        let mut total: u64 = 0;
        for (pattern, frequency) in Self::partition(pool, guess) {
            let remaining = pool.remaining_after(index, &pattern.atoms(guess));
            total += (remaining * frequency) as u64;
            if matches!(limit, Some(limit) if total as f64 > limit) {
                return None;
            }
        }
        Some(total)
    }

    /// Score `guesses`, keeping the pruning bound at the `keep`-th best
    /// total. Returns the fully scored guesses sorted by total, then word.
    fn search(
        &self,
        index: &DictionaryIndex,
        pool: &CandidatePool,
        guesses: &[Word],
        keep: usize,
    ) -> Vec<Scored> {
        let consider = |mut search: Search, guess: &Word| {
            match self.score(index, pool, guess, search.bound()) {
                Some(total) => search.record(Scored { word: *guess, total }),
                None => search.pruned += 1,
            }
            search
        };

        let search = if self.config.parallel {
            guesses
                .par_iter()
                .fold(|| Search::new(keep), consider)
                .reduce(|| Search::new(keep), Search::merge)
        } else {
            guesses.iter().fold(Search::new(keep), consider)
        };

        debug!(
            "scored {} guesses against {} candidates ({} pruned)",
            search.scored.len(),
            pool.len(),
            search.pruned
        );

        let mut scored = search.scored;
        scored.sort_by(|a, b| a.total.cmp(&b.total).then(a.word.cmp(&b.word)));
        scored
    }
}
