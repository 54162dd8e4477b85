//! # Error Types
//!
//! This module defines the error types for the cifra engine.
//!
//! Both variants carry the offending input text so callers can report what
//! the user actually typed.
//!
//! ## Propagation policy
//! These errors only surface from the low-level constructors
//! ([`Note::parse`](crate::Note::parse), [`Chord::parse`](crate::Chord::parse)).
//! The lyrics-level functions catch them and leave the offending token
//! unchanged instead, because lyric text routinely contains words that look
//! like chords but are not.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CifraError {
    /// The input text is not one of the 12 pitch classes or their
    /// enharmonic aliases.
    ///
    /// # Example
    /// ```
    /// # use cifra::Note;
    /// let err = Note::parse("H").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid note spelling 'H'");
    /// ```
    #[error("invalid note spelling '{spelling}'")]
    InvalidNote { spelling: String },

    /// The token does not start with a root-letter-plus-optional-accidental
    /// pattern, or its slash bass is not a bare note.
    ///
    /// # Example
    /// ```
    /// # use cifra::Chord;
    /// let err = Chord::parse("Xz9").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid chord token 'Xz9'");
    /// ```
    #[error("invalid chord token '{token}'")]
    InvalidChord { token: String },
}
