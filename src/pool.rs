//! The candidate pool: words still consistent with every feedback seen so far.

use crate::atom::Atom;
use crate::index::{DictionaryIndex, WordSet};
use crate::word::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: WordSet,
}

impl CandidatePool {
    /// A pool holding the whole dictionary
    pub fn new(index: &DictionaryIndex) -> Self {
        Self {
            words: index.all().clone(),
        }
    }

    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Pool members in ascending order
    pub fn sorted(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }

    /// The members that also satisfy every atom. The result is always a
    /// subset of `self`; an empty result means the atoms contradict the pool.
    pub fn intersect(&self, index: &DictionaryIndex, atoms: &[Atom]) -> CandidatePool {
        let sets = self.sets_by_size(index, atoms);
        Self {
            words: survivors(&sets).copied().collect(),
        }
    }

    /// Replace the pool with its intersection with `atoms`, returning the
    /// number of words eliminated.
    pub fn apply(&mut self, index: &DictionaryIndex, atoms: &[Atom]) -> usize {
        let narrowed = self.intersect(index, atoms);
        let eliminated = self.len() - narrowed.len();
        *self = narrowed;
        eliminated
    }

    /// Size the pool would have after intersecting with `atoms`.
    pub fn remaining_after(&self, index: &DictionaryIndex, atoms: &[Atom]) -> usize {
        let sets = self.sets_by_size(index, atoms);
        survivors(&sets).count()
    }

    /// Number of words intersecting with `atoms` would eliminate.
    pub fn count_eliminated(&self, index: &DictionaryIndex, atoms: &[Atom]) -> usize {
        self.len() - self.remaining_after(index, atoms)
    }

    /// The atom sets plus the pool itself, smallest first.
    fn sets_by_size<'a>(&'a self, index: &'a DictionaryIndex, atoms: &[Atom]) -> Vec<&'a WordSet> {
        let mut sets: Vec<&WordSet> = atoms.iter().map(|atom| index.lookup(atom)).collect();
        sets.push(&self.words);
        sets.sort_by_key(|set| set.len());
        sets
    }
}

/// Words of the first (smallest) set present in all the others. Walking the
/// smallest set keeps the number of membership probes minimal.
fn survivors<'a>(sets: &'a [&'a WordSet]) -> impl Iterator<Item = &'a Word> + 'a {
    let (smallest, rest) = match sets.split_first() {
        Some((smallest, rest)) => (Some(*smallest), rest),
        None => (None, sets),
    };
    smallest
        .into_iter()
        .flatten()
        .filter(move |word| rest.iter().all(|set| set.contains(*word)))
}
