//! Constraint atoms: the single elimination rules derived from feedback.

use std::fmt;

/// One elimination rule. Each atom selects the set of dictionary words that
/// satisfy it; the [`DictionaryIndex`](crate::DictionaryIndex) stores those
/// sets keyed by the atom itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    /// The word has `symbol` at `index`.
    PositionMatch(u8, usize),
    /// The word contains `symbol`, but not at `index`.
    PositionMismatch(u8, usize),
    /// The word contains exactly `n` occurrences of `symbol` (`n >= 1`).
    CountExact(u8, usize),
    /// The word contains at least `n` occurrences of `symbol` (`n >= 2`).
    CountAtLeast(u8, usize),
    /// The word does not contain `symbol`.
    Absent(u8),
}

impl Atom {
    pub fn symbol(&self) -> u8 {
        match *self {
            Atom::PositionMatch(s, _)
            | Atom::PositionMismatch(s, _)
            | Atom::CountExact(s, _)
            | Atom::CountAtLeast(s, _)
            | Atom::Absent(s) => s,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Atom::PositionMatch(s, i) => write!(f, "{}@{}", s as char, i),
            Atom::PositionMismatch(s, i) => write!(f, "{}!@{}", s as char, i),
            Atom::CountExact(s, n) => write!(f, "{}={}", s as char, n),
            Atom::CountAtLeast(s, n) => write!(f, "{}>={}", s as char, n),
            Atom::Absent(s) => write!(f, "-{}", s as char),
        }
    }
}
