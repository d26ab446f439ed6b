//! Words and the symbol alphabet they are drawn from.

use crate::error::{Error, Result};
use crate::WORD_LENGTH;
use std::fmt;

/// The finite set of symbols a word may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Lower-case ASCII letters `a..=z`
    pub fn letters() -> Self {
        Self {
            symbols: (b'a'..=b'z').collect(),
        }
    }

    /// ASCII digits `0..=9`
    pub fn digits() -> Self {
        Self {
            symbols: (b'0'..=b'9').collect(),
        }
    }

    /// Build an alphabet from an arbitrary set of printable ASCII symbols.
    /// Repeated symbols are collapsed.
    pub fn new(symbols: &str) -> Result<Self> {
        let mut bytes: Vec<u8> = symbols.bytes().collect();
        if let Some(bad) = bytes.iter().find(|b| !b.is_ascii_graphic()) {
            return Err(Error::InvalidDictionary(format!(
                "alphabet symbol {:?} is not printable ASCII",
                *bad as char
            )));
        }
        bytes.sort_unstable();
        bytes.dedup();
        if bytes.is_empty() {
            return Err(Error::InvalidDictionary("alphabet is empty".to_string()));
        }
        Ok(Self { symbols: bytes })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }
}

/// A fixed-length word. Symbols are stored as ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse `text` as a word over `alphabet`. No case folding is applied.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidWord {
            word: text.to_string(),
            reason,
        };
        let bytes: [u8; WORD_LENGTH] = text.as_bytes().try_into().map_err(|_| {
            invalid(format!(
                "expected {} symbols, found {}",
                WORD_LENGTH,
                text.chars().count()
            ))
        })?;
        if let Some(&bad) = bytes.iter().find(|&&b| !alphabet.contains(b)) {
            return Err(invalid(format!(
                "symbol {:?} is not in the alphabet",
                bad as char
            )));
        }
        Ok(Self(bytes))
    }

    pub fn symbols(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn symbol(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Number of occurrences of `symbol`
    pub fn count(&self, symbol: u8) -> usize {
        self.0.iter().filter(|&&s| s == symbol).count()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.0.contains(&symbol)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // always ASCII, see `Word::parse`
        let text = std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}
