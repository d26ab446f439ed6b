//! Feedback calculation for guesses.
//!
//! This module handles computing the feedback pattern (hit/present/miss)
//! for a guess against a secret word, and translating a pattern back into
//! the constraint atoms it implies.

use crate::atom::Atom;
use crate::error::{Error, Result};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct symbol in correct position (green)
    Hit,
    /// Correct symbol in wrong position (yellow)
    Present,
    /// Symbol not in word, or all its instances accounted for (gray)
    Miss,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '🟩',
            Feedback::Present => '🟨',
            Feedback::Miss => '⬛',
        }
    }

    /// Parse from a character: `+`/`g`/`2` hit, `*`/`y`/`1` present,
    /// `-`/`b`/`x`/`0` miss
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '+' | 'g' | '2' => Some(Feedback::Hit),
            '*' | 'y' | '1' => Some(Feedback::Present),
            '-' | 'b' | 'x' | '0' => Some(Feedback::Miss),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-symbol guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (miss), 1 (present), or 2 (hit).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating all hits (winning)
    pub const ALL_HIT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Miss => 0,
                Feedback::Present => 1,
                Feedback::Hit => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against a secret word.
    ///
    /// Hits are resolved first; the secret symbols left over then serve, left
    /// to right, as the budget for `Present` marks. A repeated guess symbol is
    /// therefore never marked more often than it occurs in the secret, and the
    /// surplus occurrences are `Miss`.
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let guess = guess.symbols();
        let secret = secret.symbols();

        let mut feedback = [Feedback::Miss; WORD_LENGTH];
        let mut unmatched: [Option<u8>; WORD_LENGTH] = [None; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                feedback[i] = Feedback::Hit;
            } else {
                unmatched[i] = Some(secret[i]);
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Hit {
                if let Some(slot) = unmatched.iter_mut().find(|s| **s == Some(guess[i])) {
                    *slot = None;
                    feedback[i] = Feedback::Present;
                }
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Miss; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Miss,
                1 => Feedback::Present,
                2 => Feedback::Hit,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all hits)
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    /// The constraint atoms implied by seeing this pattern for `guess`.
    ///
    /// Positional atoms come first, left to right, followed by the count
    /// atoms for each distinct symbol in order of first appearance. For a
    /// symbol whose occurrences were not all confirmed, the true count is
    /// known exactly and the unconfirmed positions cannot hold it.
    pub fn atoms(self, guess: &Word) -> Vec<Atom> {
        let feedbacks = self.to_feedbacks();
        let symbols = guess.symbols();
        let mut atoms = Vec::with_capacity(2 * WORD_LENGTH);

        for (index, (&symbol, feedback)) in symbols.iter().zip(feedbacks).enumerate() {
            match feedback {
                Feedback::Hit => atoms.push(Atom::PositionMatch(symbol, index)),
                Feedback::Present => atoms.push(Atom::PositionMismatch(symbol, index)),
                Feedback::Miss => {}
            }
        }

        for (first, &symbol) in symbols.iter().enumerate() {
            if symbols[..first].contains(&symbol) {
                continue;
            }
            let positions: Vec<usize> = (0..WORD_LENGTH)
                .filter(|&index| symbols[index] == symbol)
                .collect();
            let confirmed = positions
                .iter()
                .filter(|&&index| feedbacks[index] != Feedback::Miss)
                .count();

            if confirmed == 0 {
                atoms.push(Atom::Absent(symbol));
            } else if positions.len() > confirmed {
                atoms.extend(
                    positions
                        .iter()
                        .filter(|&&index| feedbacks[index] == Feedback::Miss)
                        .map(|&index| Atom::PositionMismatch(symbol, index)),
                );
                atoms.push(Atom::CountExact(symbol, confirmed));
            } else if confirmed > 1 {
                atoms.push(Atom::CountAtLeast(symbol, confirmed));
            }
        }

        atoms
    }

    /// Parse a pattern from a string like "+*---", "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFeedback(s.to_string());
        let feedbacks = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().map_err(|_| invalid())?;
        Ok(Self::new(arr))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

/// The atoms a guess would yield against `secret`; identical to computing the
/// pattern first and deriving its atoms.
pub fn atoms_from_comparison(guess: &Word, secret: &Word) -> Vec<Atom> {
    FeedbackPattern::calculate(guess, secret).atoms(guess)
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
