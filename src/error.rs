//! Error type shared by the library.

use thiserror::Error;

/// Errors raised by the solver library.
///
/// A contradiction or an unsolved game is not an error; those are reported
/// through [`SessionState`](crate::SessionState).
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),
    #[error("invalid feedback {0:?}: expected 5 of '+', '*', '-' (or g/y/b, 2/1/0)")]
    InvalidFeedback(String),
    #[error("the game session has already finished")]
    SessionFinished,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
