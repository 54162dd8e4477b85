//! # Stored-Lyrics Markup
//!
//! The rich-text editor stores lyrics with a small markup vocabulary:
//! `<p>` paragraphs, `<br>` breaks and `<b>`/`<i>`/`<u>` styling (with
//! `<strong>`/`<em>` synonyms), plus a handful of entities. The format
//! converters treat those tags as opaque text; the functions here do the
//! explicit conversions the PDF and persistence collaborators ask for.
//!
//! Tag scanning is the same explicit find-`<`/find-`>` walk the bracket
//! scanner uses. A `<` with no closing `>` is literal text.

use serde::Serialize;

/// A run of text with uniform styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// One line of output for the PDF renderer: styled segments plus the
/// tag-free raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedLine {
    pub segments: Vec<TextSegment>,
    pub raw: String,
}

/// Flatten stored markup to plain text.
///
/// Paragraph ends and `<br>` become newlines, `<p>` openers disappear, any
/// remaining tag is dropped and entities are decoded. This is the first
/// transformation applied before laying lyrics out as text.
pub fn to_plain_text(markup: &str) -> String {
    decode_entities(&strip_tags(&paragraphs_to_newlines(markup)))
}

/// Parse stored markup into per-line styled segments for the PDF renderer.
///
/// Paragraphs and breaks split lines first; each line then yields its
/// `<b>`/`<i>`/`<u>` runs. Unknown tags are dropped. `raw` is the line with
/// every tag removed.
pub fn parse_formatted_lines(markup: &str) -> Vec<FormattedLine> {
    paragraphs_to_newlines(markup)
        .split('\n')
        .map(|line| FormattedLine {
            segments: line_segments(line),
            raw: strip_tags(line),
        })
        .collect()
}

/// Convert plain lyrics text to the stored markup format.
///
/// The migration direction: text that already carries `<p>` or `<br` markup
/// passes through untouched. Otherwise special characters are escaped, runs
/// of two or more spaces become `&nbsp;` sequences (so chord columns
/// survive the round trip through the editor), and each line is wrapped in
/// a paragraph.
pub fn plain_to_markup(text: &str) -> String {
    if text.is_empty() || text.contains("<p>") || text.contains("<br") {
        return text.to_string();
    }

    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    nbsp_runs(&escaped)
        .split('\n')
        .map(|line| format!("<p>{line}</p>"))
        .collect()
}

/// Rewrite paragraph and break tags as newlines, leaving other tags alone.
fn paragraphs_to_newlines(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());

    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        let tag = &rest[open..open + close + 1];
        let name = rest[open + 1..open + close]
            .trim()
            .trim_end_matches('/')
            .trim_end()
            .to_ascii_lowercase();
        match name.as_str() {
            "/p" | "br" => out.push('\n'),
            "p" => {}
            _ => out.push_str(tag),
        }
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out
}

/// Remove every `<...>` tag, keeping the text between them.
fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());

    let mut rest = line;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Parse one line of markup into styled segments.
fn line_segments(line: &str) -> Vec<TextSegment> {
    let mut segments: Vec<TextSegment> = Vec::new();
    let mut buffer = String::new();
    let (mut bold, mut italic, mut underline) = (false, false, false);

    let flush = |segments: &mut Vec<TextSegment>, buffer: &mut String, bold, italic, underline| {
        if !buffer.is_empty() {
            segments.push(TextSegment {
                text: std::mem::take(buffer),
                bold,
                italic,
                underline,
            });
        }
    };

    let mut rest = line;
    loop {
        let Some(open) = rest.find('<') else {
            buffer.push_str(rest);
            break;
        };
        let Some(close) = rest[open..].find('>') else {
            buffer.push_str(rest);
            break;
        };
        buffer.push_str(&rest[..open]);
        let name = rest[open + 1..open + close].trim().to_ascii_lowercase();
        match name.as_str() {
            "b" | "strong" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                bold = true;
            }
            "/b" | "/strong" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                bold = false;
            }
            "i" | "em" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                italic = true;
            }
            "/i" | "/em" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                italic = false;
            }
            "u" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                underline = true;
            }
            "/u" => {
                flush(&mut segments, &mut buffer, bold, italic, underline);
                underline = false;
            }
            _ => {}
        }
        rest = &rest[open + close + 1..];
    }
    flush(&mut segments, &mut buffer, bold, italic, underline);

    if segments.is_empty() {
        segments.push(TextSegment::default());
    }
    segments
}

/// Runs of two or more spaces become `&nbsp;` sequences.
fn nbsp_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;

    for c in text.chars() {
        if c == ' ' {
            run += 1;
            continue;
        }
        flush_spaces(&mut out, run);
        run = 0;
        out.push(c);
    }
    flush_spaces(&mut out, run);

    out
}

fn flush_spaces(out: &mut String, run: usize) {
    if run >= 2 {
        for _ in 0..run {
            out.push_str("&nbsp;");
        }
    } else if run == 1 {
        out.push(' ');
    }
}
