//! # Lyrics Format Converter
//!
//! Detects and converts between the two chord-sheet layouts:
//!
//! ```text
//! inline:            [C]Hello [G]world
//!
//! chord-over-lyrics: C     G
//!                    Hello world
//! ```
//!
//! Conversion is a line-by-line classification pass with no persistent
//! state. Chord-line detection is a heuristic: a line counts as a chord line
//! when more than half of its whitespace-separated tokens read as chord
//! symbols and a non-empty lyric line follows. Short ambiguous lines (a
//! lyric line consisting only of "A" and "C") can misclassify; that
//! trade-off is accepted and the threshold is part of the contract, since
//! stored documents depend on it.

use crate::chord::Chord;
use crate::scan::{self, AnchoredChord};

/// Chord qualities the line detector recognizes, longest first.
const QUALITIES: [&str; 5] = ["maj", "dim", "aug", "sus", "m"];

/// Extension numbers the line detector recognizes.
const EXTENSIONS: [&str; 8] = ["11", "13", "2", "4", "5", "6", "7", "9"];

/// Whether a bare token reads as a chord symbol.
///
/// Used by the chord-line detector only: the token must parse under the
/// chord grammar, carry no slash bass, and its suffix must come from the
/// small recognized set, so ordinary words that start with a note letter
/// ("Dog") do not count. Slash chords still transpose fine; they just never
/// tip a line into being classified as a chord line.
fn is_chord_token(token: &str) -> bool {
    match Chord::parse(token) {
        Ok(chord) => chord.bass.is_none() && is_recognized_quality(&chord.suffix),
        Err(_) => false,
    }
}

/// Optional quality, then optional extension, nothing else.
fn is_recognized_quality(suffix: &str) -> bool {
    let rest = QUALITIES
        .iter()
        .find_map(|q| suffix.strip_prefix(q))
        .unwrap_or(suffix);
    rest.is_empty() || EXTENSIONS.contains(&rest)
}

/// Chord-line heuristic: more than half of the non-empty tokens read as
/// chords, and a non-empty lyric line follows.
pub fn looks_like_chord_line(line: &str, next_line: Option<&str>) -> bool {
    if !next_line.is_some_and(|next| !next.trim().is_empty()) {
        return false;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return false;
    }
    let chords = tokens.iter().filter(|token| is_chord_token(token)).count();
    chords * 2 > tokens.len()
}

/// Convert chord-over-lyrics layout to inline layout.
///
/// Each detected chord line folds into the lyric line below it: every chord
/// is inserted as `[chord]` at the lyric position matching its column in
/// the chord line. Insertions run in ascending column order, so earlier
/// insertions never disturb later anchors; columns past the end of the
/// lyric clamp to the end. Lines that do not match the heuristic pass
/// through unchanged.
pub fn chord_over_to_inline(lyrics: &str) -> String {
    let lines: Vec<&str> = lyrics.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let next = lines.get(i + 1).copied();
        if looks_like_chord_line(lines[i], next) {
            out.push(fold_chord_line(lines[i], next.unwrap_or("")));
            i += 2;
        } else {
            out.push(lines[i].to_string());
            i += 1;
        }
    }

    out.join("\n")
}

/// Insert the chords of `chord_line` into `lyric_line` at their columns.
fn fold_chord_line(chord_line: &str, lyric_line: &str) -> String {
    let lyric: Vec<char> = lyric_line.chars().collect();
    let mut out = String::with_capacity(chord_line.len() + lyric_line.len());
    let mut cursor = 0;

    for (column, token) in chord_columns(chord_line) {
        let at = column.min(lyric.len()).max(cursor);
        out.extend(&lyric[cursor..at]);
        out.push('[');
        out.push_str(token);
        out.push(']');
        cursor = at;
    }
    out.extend(&lyric[cursor..]);

    out
}

/// Whitespace-separated chord tokens of a chord line, with the character
/// column each one starts at.
fn chord_columns(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut column = 0;
    let mut start: Option<(usize, usize)> = None; // (byte, column)

    for (byte, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some((token_byte, token_column)) = start.take() {
                let token = &line[token_byte..byte];
                if is_chord_token(token) {
                    out.push((token_column, token));
                }
            }
        } else if start.is_none() {
            start = Some((byte, column));
        }
        column += 1;
    }
    if let Some((token_byte, token_column)) = start {
        let token = &line[token_byte..];
        if is_chord_token(token) {
            out.push((token_column, token));
        }
    }

    out
}

/// Convert inline layout to chord-over-lyrics layout.
///
/// Every line carrying bracketed chords expands to two lines: a chord line
/// with each chord at the column of its anchor in the de-bracketed lyric
/// text, then the plain lyric line. Chords are laid out in ascending
/// offset order; when two would overlap, the later one starts immediately
/// after the previous one ends. Chordless lines emit a single unchanged
/// line.
pub fn inline_to_chord_over(lyrics: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in lyrics.split('\n') {
        let (lyric, chords) = scan::extract_bracketed(line);
        if chords.is_empty() {
            out.push(line.to_string());
        } else {
            out.push(build_chord_line(&chords));
            out.push(lyric);
        }
    }

    out.join("\n")
}

/// Lay chords out on a line of spaces at their anchor columns.
fn build_chord_line(chords: &[AnchoredChord]) -> String {
    let mut line = String::new();
    let mut width = 0;

    for chord in chords {
        while width < chord.offset {
            line.push(' ');
            width += 1;
        }
        line.push_str(&chord.text);
        width += chord.text.chars().count();
    }

    line
}

/// Strip every chord from a lyrics blob, leaving lyric text only.
///
/// Bracketed tokens are removed in place; detected chord lines are dropped
/// whole. An unterminated `[` stays as literal text.
pub fn strip_chords(lyrics: &str) -> String {
    let lines: Vec<&str> = lyrics.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if looks_like_chord_line(line, lines.get(i + 1).copied()) {
            continue;
        }
        let (lyric, _) = scan::extract_bracketed(line);
        out.push(lyric);
    }

    out.join("\n")
}

/// Normalize arbitrary lyrics input (user-entered or OCR text) to inline
/// layout.
///
/// Text that already contains both `[` and `]` anywhere is assumed inline
/// and returned unchanged; there is no detection of inline-but-malformed
/// input. Otherwise, if any adjacent line pair trips the chord-line
/// heuristic, the blob converts from chord-over-lyrics; plain lyrics with
/// no chords pass through.
pub fn normalize_lyrics(lyrics: &str) -> String {
    if lyrics.contains('[') && lyrics.contains(']') {
        return lyrics.to_string();
    }
    if is_chord_over_lyrics(lyrics) {
        return chord_over_to_inline(lyrics);
    }
    lyrics.to_string()
}

/// Whether any adjacent line pair looks like a chord line over lyrics.
pub fn is_chord_over_lyrics(lyrics: &str) -> bool {
    let lines: Vec<&str> = lyrics.split('\n').collect();
    lines
        .iter()
        .enumerate()
        .any(|(i, line)| looks_like_chord_line(line, lines.get(i + 1).copied()))
}
