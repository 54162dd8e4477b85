//! Chord transposition and the lyrics transposition driver.

use crate::chord::Chord;
use crate::key;
use crate::scan;

/// Transpose a chord by the given number of semitones.
///
/// Root and bass shift independently; the suffix passes through untouched.
/// Zero semitones returns an equal chord.
pub fn transpose_chord(chord: &Chord, semitones: i32) -> Chord {
    Chord {
        root: chord.root.shift(semitones),
        suffix: chord.suffix.clone(),
        bass: chord.bass.map(|bass| bass.shift(semitones)),
    }
}

/// Transpose a single chord symbol between two keys.
///
/// Soft-fails: if the symbol does not parse as a chord, or either key is
/// unrecognized, the input text comes back unchanged.
pub fn transpose_symbol(symbol: &str, from_key: &str, to_key: &str) -> String {
    let semitones = key::semitone_distance(from_key, to_key);
    if semitones == 0 {
        return symbol.to_string();
    }
    match Chord::parse(symbol) {
        Ok(chord) => {
            transpose_chord(&chord, i32::from(semitones)).render(key::prefers_flats(to_key))
        }
        Err(_) => symbol.to_string(),
    }
}

/// Transpose every bracketed chord token in an inline-format lyrics blob.
///
/// The key distance decides the shift; when it is 0 (same key, or an
/// unrecognized key) the input is returned byte-identical. Otherwise a
/// single left-to-right pass rewrites each `[...]` interior with the
/// re-rendered chord, spelled with sharps or flats to suit the destination
/// key. A bracketed token that does not parse as a chord stays verbatim, so
/// one malformed token never disturbs the rest of the document.
///
/// # Example
/// ```
/// use cifra::transpose_lyrics;
///
/// let out = transpose_lyrics("[C]Amazing [F]grace", "C", "D");
/// assert_eq!(out, "[D]Amazing [G]grace");
/// ```
pub fn transpose_lyrics(lyrics: &str, from_key: &str, to_key: &str) -> String {
    let semitones = key::semitone_distance(from_key, to_key);
    if semitones == 0 {
        return lyrics.to_string();
    }

    let prefer_flat = key::prefers_flats(to_key);
    scan::replace_bracketed(lyrics, |token| {
        Chord::parse(token)
            .ok()
            .map(|chord| transpose_chord(&chord, i32::from(semitones)).render(prefer_flat))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_shifts_root_and_bass_independently() {
        let chord = Chord::parse("C/G").unwrap();
        let up = transpose_chord(&chord, 2);
        assert_eq!(up.render(false), "D/A");
    }

    #[test]
    fn test_transpose_keeps_suffix_verbatim() {
        for suffix in ["m", "7", "maj7", "sus4", "m7b5", "add9", "13(#11)"] {
            let chord = Chord::parse(&format!("C{suffix}")).unwrap();
            assert_eq!(transpose_chord(&chord, 5).suffix, suffix);
        }
    }

    #[test]
    fn test_transpose_zero_is_identity() {
        let chord = Chord::parse("F#m7/B").unwrap();
        assert_eq!(transpose_chord(&chord, 0), chord);
    }

    #[test]
    fn test_full_octave_returns_to_start() {
        let chord = Chord::parse("Em").unwrap();
        assert_eq!(transpose_chord(&chord, 12), chord);
        assert_eq!(
            transpose_chord(&transpose_chord(&chord, 7), 5),
            chord
        );
    }

    #[test]
    fn test_symbol_convenience_soft_fails() {
        assert_eq!(transpose_symbol("Am", "C", "D"), "Bm");
        assert_eq!(transpose_symbol("hello", "C", "D"), "hello");
        assert_eq!(transpose_symbol("Am", "C", "??"), "Am");
    }

    #[test]
    fn test_lyrics_same_key_is_byte_identical() {
        let lyrics = "[C]odd  spacing\tand [??]junk [";
        assert_eq!(transpose_lyrics(lyrics, "G", "G"), lyrics);
    }

    #[test]
    fn test_lyrics_malformed_token_left_verbatim() {
        assert_eq!(transpose_lyrics("[Xz9]text", "C", "D"), "[Xz9]text");
        assert_eq!(
            transpose_lyrics("[C]ok [word] end", "C", "D"),
            "[D]ok [word] end"
        );
    }

    #[test]
    fn test_lyrics_flat_destination_spelling() {
        assert_eq!(
            transpose_lyrics("[A]Morning [E]sun", "A", "Bb"),
            "[Bb]Morning [F]sun"
        );
    }
}
