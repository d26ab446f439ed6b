//! # Wordle Index
//!
//! A Wordle solver built around a precomputed constraint index.
//!
//! Every elementary rule feedback can imply ("has `a` at position 2", "has
//! exactly one `e`", "has no `t`") is indexed once, up front, to the set of
//! dictionary words satisfying it. Narrowing the candidate pool is then a
//! matter of intersecting a handful of precomputed sets. Guesses are chosen
//! by minimizing the expected size of the pool after the feedback arrives.

pub mod atom;
pub mod cache;
pub mod error;
pub mod feedback;
pub mod index;
pub mod pool;
pub mod session;
pub mod simulate;
pub mod solver;
pub mod word;

pub use atom::Atom;
pub use cache::FirstGuessCache;
pub use error::{Error, Result};
pub use feedback::{atoms_from_comparison, Feedback, FeedbackPattern};
pub use index::{DictionaryIndex, WordSet};
pub use pool::CandidatePool;
pub use session::{FeedbackOracle, GameSession, SecretOracle, SessionConfig, SessionState};
pub use simulate::{run_batch, BatchConfig, BatchSummary};
pub use solver::{GuessAnalysis, GuessSelector, SelectorConfig};
pub use word::{Alphabet, Word};

/// Word length
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_TURNS: usize = 6;

/// Number of opening guesses kept by the first-guess cache
pub const FIRST_GUESS_CACHE_SIZE: usize = 15;

/// Normalize dictionary text: one word per line, trimmed and lower-cased,
/// blank lines skipped.
pub fn parse_dictionary(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Load and index the dictionary file at `path`.
pub fn load_dictionary(
    path: impl AsRef<std::path::Path>,
    alphabet: Alphabet,
) -> Result<DictionaryIndex> {
    let contents = std::fs::read_to_string(path)?;
    DictionaryIndex::build(parse_dictionary(&contents), alphabet)
}
