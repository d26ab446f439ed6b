//! The dictionary index.
//!
//! For every symbol of the alphabet and every atom reachable for it, the index
//! holds the precomputed set of dictionary words satisfying that atom. It is
//! built once and read-only afterwards, so one index can be shared by any
//! number of sessions.

use crate::atom::Atom;
use crate::error::{Error, Result};
use crate::word::{Alphabet, Word};
use crate::WORD_LENGTH;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// A set of words. Used for both index entries and candidate pools.
pub type WordSet = FxHashSet<Word>;

#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    alphabet: Alphabet,
    /// Every dictionary word, sorted
    words: Vec<Word>,
    all: WordSet,
    sets: FxHashMap<Atom, WordSet>,
    empty: WordSet,
}

impl DictionaryIndex {
    /// Build the index from raw dictionary text entries.
    ///
    /// Entries must already be normalized (case folded); any entry of the
    /// wrong length or with a symbol outside `alphabet` makes the whole
    /// dictionary invalid. Duplicates collapse.
    pub fn build<I, S>(entries: I, alphabet: Alphabet) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| {
                Word::parse(entry.as_ref(), &alphabet)
                    .map_err(|e| Error::InvalidDictionary(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_words(words, alphabet)
    }

    /// Build the index from already parsed words.
    pub fn from_words(words: impl IntoIterator<Item = Word>, alphabet: Alphabet) -> Result<Self> {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(Error::InvalidDictionary(
                "dictionary contains no words".to_string(),
            ));
        }
        if let Some(word) = words
            .iter()
            .find(|w| w.symbols().iter().any(|&s| !alphabet.contains(s)))
        {
            return Err(Error::InvalidDictionary(format!(
                "word {} has a symbol outside the alphabet",
                word
            )));
        }

        let mut sets: FxHashMap<Atom, WordSet> = FxHashMap::default();
        let mut add = |atom: Atom, word: Word| {
            sets.entry(atom).or_default().insert(word);
        };

        for &word in &words {
            for &symbol in alphabet.symbols() {
                let count = word.count(symbol);
                if count == 0 {
                    add(Atom::Absent(symbol), word);
                    continue;
                }
                for index in 0..WORD_LENGTH {
                    if word.symbol(index) != symbol {
                        add(Atom::PositionMismatch(symbol, index), word);
                    }
                }
                add(Atom::CountExact(symbol, count), word);
                for n in 2..=count {
                    add(Atom::CountAtLeast(symbol, n), word);
                }
            }
            for (index, &symbol) in word.symbols().iter().enumerate() {
                add(Atom::PositionMatch(symbol, index), word);
            }
        }

        debug!(
            "indexed {} words under {} atoms",
            words.len(),
            sets.len()
        );

        Ok(Self {
            alphabet,
            all: words.iter().copied().collect(),
            words,
            sets,
            empty: WordSet::default(),
        })
    }

    /// The words satisfying `atom`. Atoms no dictionary word satisfies map to
    /// the empty set.
    pub fn lookup(&self, atom: &Atom) -> &WordSet {
        self.sets.get(atom).unwrap_or(&self.empty)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All dictionary words in ascending order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn all(&self) -> &WordSet {
        &self.all
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.all.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Parse `text` against this index's alphabet.
    pub fn parse_word(&self, text: &str) -> Result<Word> {
        Word::parse(text, &self.alphabet)
    }
}
