//! First-guess cache.
//!
//! Scoring every dictionary word against the full dictionary is by far the
//! most expensive search of a game, and its result never changes for a given
//! dictionary. The shortlist of the best openings is therefore kept in a
//! newline-delimited file and reused on turn 0.

use crate::error::Result;
use crate::index::DictionaryIndex;
use crate::pool::CandidatePool;
use crate::solver::GuessSelector;
use crate::word::Word;
use crate::FIRST_GUESS_CACHE_SIZE;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct FirstGuessCache {
    path: Option<PathBuf>,
    words: Vec<Word>,
}

impl FirstGuessCache {
    /// A cache that lives only in memory
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A cache backed by `path`, loaded now if the file exists.
    pub fn open(path: impl Into<PathBuf>, index: &DictionaryIndex) -> Result<Self> {
        let path = path.into();
        let words = load(&path, index)?.unwrap_or_default();
        Ok(Self {
            path: Some(path),
            words,
        })
    }

    /// Opening guesses, most favorable first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the shortlist and persist it if the cache is file-backed.
    pub fn store(&mut self, words: Vec<Word>) -> Result<()> {
        if let Some(path) = &self.path {
            save(path, &words)?;
        }
        self.words = words;
        Ok(())
    }

    /// Run the full opening search if the cache holds nothing yet, keeping
    /// the best [`FIRST_GUESS_CACHE_SIZE`] guesses.
    pub fn prime(&mut self, index: &DictionaryIndex, selector: &GuessSelector) -> Result<&[Word]> {
        if self.words.is_empty() {
            info!(
                "computing opening guesses over {} words, this may take a while",
                index.len()
            );
            let pool = CandidatePool::new(index);
            let ranked = selector.rank(index, &pool, index.words(), FIRST_GUESS_CACHE_SIZE);
            self.store(ranked.into_iter().map(|analysis| analysis.word).collect())?;
        }
        Ok(&self.words)
    }
}

/// Read a cache file. Entries that do not parse or are no longer in the
/// dictionary are dropped; a missing file or one with no usable entries is
/// `None`.
pub fn load(path: &Path, index: &DictionaryIndex) -> Result<Option<Vec<Word>>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let mut words = Vec::new();
    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match index.parse_word(line) {
            Ok(word) if index.contains(&word) => words.push(word),
            _ => warn!("ignoring cached opening {:?}: not in the dictionary", line),
        }
    }
    if words.is_empty() {
        return Ok(None);
    }
    info!("loaded {} opening guesses from {}", words.len(), path.display());
    Ok(Some(words))
}

/// Write `words` one per line.
pub fn save(path: &Path, words: &[Word]) -> Result<()> {
    let mut contents: String = words.iter().map(|w| format!("{}\n", w)).collect();
    if contents.ends_with('\n') {
        contents.pop();
    }
    fs::write(path, contents)?;
    info!("saved {} opening guesses to {}", words.len(), path.display());
    Ok(())
}
