//! # Bracket Scanner
//!
//! Explicit scanning of `[...]` chord tokens in lyric text: find an opening
//! bracket, find its closing bracket, extract, advance. Keeping this a plain
//! scanner (rather than one combined regex) makes the offset bookkeeping of
//! the format converters unambiguous and testable on its own.
//!
//! Anchor offsets are measured in characters of the de-bracketed lyric text,
//! not bytes, so multi-byte lyric text lines up correctly.

/// A chord token pulled out of an inline lyric line, with the character
/// offset it anchors to in the de-bracketed lyric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredChord {
    pub offset: usize,
    pub text: String,
}

/// Split an inline line into plain lyric text and its anchored chord tokens.
///
/// An unterminated `[` is literal text, not a token.
pub fn extract_bracketed(line: &str) -> (String, Vec<AnchoredChord>) {
    let mut lyric = String::with_capacity(line.len());
    let mut chords = Vec::new();
    let mut offset = 0;

    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']') else {
            break;
        };
        let before = &rest[..open];
        lyric.push_str(before);
        offset += before.chars().count();
        chords.push(AnchoredChord {
            offset,
            text: rest[open + 1..open + 1 + close].to_string(),
        });
        rest = &rest[open + 1 + close + 1..];
    }
    lyric.push_str(rest);

    (lyric, chords)
}

/// Rewrite every bracketed token in `text`, preserving the delimiters.
///
/// The callback sees the token interior; returning `None` keeps it
/// verbatim. An unterminated `[` is copied through as literal text. This is
/// a single left-to-right pass, so bracket characters inside a rewritten
/// token are never rescanned.
pub fn replace_bracketed<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());

    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']') else {
            break;
        };
        out.push_str(&rest[..open]);
        let inner = &rest[open + 1..open + 1 + close];
        out.push('[');
        match rewrite(inner) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(inner),
        }
        out.push(']');
        rest = &rest[open + 1 + close + 1..];
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(offset: usize, text: &str) -> AnchoredChord {
        AnchoredChord {
            offset,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_offsets_are_in_debracketed_text() {
        let (lyric, chords) = extract_bracketed("[C]Hello [G]world");
        assert_eq!(lyric, "Hello world");
        assert_eq!(chords, vec![anchored(0, "C"), anchored(6, "G")]);
    }

    #[test]
    fn test_extract_counts_characters_not_bytes() {
        let (lyric, chords) = extract_bracketed("coração [D]meu");
        assert_eq!(lyric, "coração meu");
        assert_eq!(chords, vec![anchored(8, "D")]);
    }

    #[test]
    fn test_extract_unterminated_bracket_is_literal() {
        let (lyric, chords) = extract_bracketed("Hello [world");
        assert_eq!(lyric, "Hello [world");
        assert!(chords.is_empty());
    }

    #[test]
    fn test_extract_adjacent_and_empty_tokens() {
        let (lyric, chords) = extract_bracketed("[C][G]go[]");
        assert_eq!(lyric, "go");
        assert_eq!(
            chords,
            vec![anchored(0, "C"), anchored(0, "G"), anchored(2, "")]
        );
    }

    #[test]
    fn test_replace_rewrites_interiors_only() {
        let out = replace_bracketed("[C]Hello [G]world", |t| Some(format!("{t}7")));
        assert_eq!(out, "[C7]Hello [G7]world");
    }

    #[test]
    fn test_replace_none_keeps_token_verbatim() {
        let out = replace_bracketed("[C]la [??]la", |t| {
            if t == "C" {
                Some("D".to_string())
            } else {
                None
            }
        });
        assert_eq!(out, "[D]la [??]la");
    }

    #[test]
    fn test_replace_unterminated_bracket_passes_through() {
        let out = replace_bracketed("end [", |_| Some("X".to_string()));
        assert_eq!(out, "end [");
    }
}
