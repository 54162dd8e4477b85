//! # Chord Parser
//!
//! Splits a chord token into root note, quality/extension suffix and an
//! optional slash bass, and renders it back.
//!
//! The grammar is `<root>[<suffix>][/<bass>]`: the root is a letter A-G
//! (case-insensitive) with an optional single accidental, the suffix is
//! whatever text follows up to an optional `/`, and the bass is a bare note
//! after that slash. The suffix is opaque: `m`, `7`, `maj7`, `sus4` and
//! anything else ride through parsing, transposition and rendering
//! untouched.

use serde::Serialize;

use crate::error::CifraError;
use crate::note::Note;

/// A parsed chord token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub root: Note,
    /// Quality/extension text, carried verbatim.
    pub suffix: String,
    /// Slash-chord bass, if any.
    pub bass: Option<Note>,
}

impl Chord {
    /// Parse a chord token.
    ///
    /// Fails with [`CifraError::InvalidChord`] when the token does not start
    /// with a valid root pattern, or when the text after the first `/` is
    /// not a bare note, so `C/G/E` and `C/G7` are rejected.
    ///
    /// # Example
    /// ```
    /// use cifra::Chord;
    ///
    /// let chord = Chord::parse("Am7")?;
    /// assert_eq!(chord.suffix, "m7");
    /// assert!(chord.bass.is_none());
    ///
    /// let slash = Chord::parse("C/G")?;
    /// assert!(slash.bass.is_some());
    /// # Ok::<(), cifra::CifraError>(())
    /// ```
    pub fn parse(token: &str) -> Result<Chord, CifraError> {
        let invalid = || CifraError::InvalidChord {
            token: token.to_string(),
        };

        let root_len = root_spelling_len(token).ok_or_else(invalid)?;
        let root = Note::parse(&token[..root_len]).map_err(|_| invalid())?;

        match token[root_len..].split_once('/') {
            Some((suffix, bass)) => {
                let bass = Note::parse(bass).map_err(|_| invalid())?;
                Ok(Chord {
                    root,
                    suffix: suffix.to_string(),
                    bass: Some(bass),
                })
            }
            None => Ok(Chord {
                root,
                suffix: token[root_len..].to_string(),
                bass: None,
            }),
        }
    }

    /// Render back to text: root spelling + suffix [+ `/` + bass spelling].
    pub fn render(&self, prefer_flat: bool) -> String {
        match self.bass {
            Some(bass) => format!(
                "{}{}/{}",
                self.root.render(prefer_flat),
                self.suffix,
                bass.render(prefer_flat)
            ),
            None => format!("{}{}", self.root.render(prefer_flat), self.suffix),
        }
    }
}

/// Byte length of the leading root spelling, if the token starts with one.
///
/// Greedy like the original grammar: a `#` or `b` right after the letter
/// always belongs to the root, so `Bb` is the note Bb, not B plus a `b`
/// suffix.
fn root_spelling_len(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    if !matches!(chars.next()?.to_ascii_uppercase(), 'A'..='G') {
        return None;
    }
    match chars.next() {
        Some('#') | Some('b') => Some(2),
        _ => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(token: &str) -> Chord {
        Chord::parse(token).unwrap()
    }

    #[test]
    fn test_parse_root_and_suffix() {
        assert_eq!(parse("C").suffix, "");
        assert_eq!(parse("Am7").suffix, "m7");
        assert_eq!(parse("Gsus4").suffix, "sus4");
        assert_eq!(parse("Bbmaj7").root, Note::parse("Bb").unwrap());
        assert_eq!(parse("Bbmaj7").suffix, "maj7");
    }

    #[test]
    fn test_parse_slash_bass() {
        let chord = parse("D/F#");
        assert_eq!(chord.root, Note::parse("D").unwrap());
        assert_eq!(chord.bass, Some(Note::parse("F#").unwrap()));
        assert_eq!(chord.suffix, "");

        let with_suffix = parse("Am7/G");
        assert_eq!(with_suffix.suffix, "m7");
        assert_eq!(with_suffix.bass, Some(Note::parse("G").unwrap()));
    }

    #[test]
    fn test_rejects_invalid_tokens() {
        for bad in ["", "Xz9", "H7", "/G", "C/", "C/G/E", "C/G7", "7"] {
            assert!(Chord::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_render_preserves_suffix() {
        let chord = parse("C#m7b5");
        assert_eq!(chord.render(false), "C#m7b5");
        assert_eq!(chord.render(true), "Dbm7b5");
    }

    #[test]
    fn test_render_slash_chord_spelling() {
        let chord = parse("Ab/Eb");
        assert_eq!(chord.render(true), "Ab/Eb");
        assert_eq!(chord.render(false), "G#/D#");
    }

    #[test]
    fn test_roundtrip_keeps_identity() {
        for token in ["C", "Am", "F#m7", "Bb7", "C/G", "Dsus2/A"] {
            assert_eq!(parse(token).render(false), token.replace("Bb", "A#"));
        }
    }
}
