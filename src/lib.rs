//! Chord transposition and lyrics-format engine for chord sheets.
//!
//! Lyrics are plain text with chord tokens in one of two layouts: inline
//! (`[C]word`, the canonical stored form) or chord-over-lyrics (chords on
//! their own line, space-positioned above the lyric line). This crate
//! parses chord tokens, shifts them by musical interval with enharmonic
//! spelling, converts between the layouts and strips chords entirely.
//!
//! Everything is a pure function over strings: no I/O, no shared state,
//! safe to call from concurrent request handlers. Malformed chord-like
//! tokens in lyric text are always left untouched rather than erroring, so
//! one bad token never corrupts a document.
//!
//! ```
//! use cifra::{normalize_lyrics, transpose_lyrics};
//!
//! let pasted = "C     G\nHello world";
//! let inline = normalize_lyrics(pasted);
//! assert_eq!(inline, "[C]Hello [G]world");
//! assert_eq!(transpose_lyrics(&inline, "C", "D"), "[D]Hello [A]world");
//! ```

pub mod chord;
pub mod error;
pub mod format;
pub mod key;
pub mod markup;
pub mod note;
pub mod scan;
pub mod transpose;

pub use chord::Chord;
pub use error::CifraError;
pub use format::{
    chord_over_to_inline, inline_to_chord_over, is_chord_over_lyrics, looks_like_chord_line,
    normalize_lyrics, strip_chords,
};
pub use key::{all_keys, prefers_flats, semitone_distance};
pub use markup::{parse_formatted_lines, plain_to_markup, to_plain_text, FormattedLine, TextSegment};
pub use note::Note;
pub use transpose::{transpose_chord, transpose_lyrics, transpose_symbol};

/// Normalize arbitrary lyrics input and transpose it between two keys.
/// This is the main entry point for request handlers: whatever layout the
/// user pasted, the result is inline lyrics in the destination key.
pub fn normalize_and_transpose(lyrics: &str, from_key: &str, to_key: &str) -> String {
    let normalized = format::normalize_lyrics(lyrics);
    transpose::transpose_lyrics(&normalized, from_key, to_key)
}
