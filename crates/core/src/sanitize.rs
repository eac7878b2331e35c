//! The general MDX sanitizer.
//!
//! Rewrites raw markdown so it can be embedded in a component-syntax
//! renderer where `{`, `}`, and `<Tag>` are live syntax. Fenced code,
//! inline code spans, structural markdown lines, recognized HTML
//! elements, and component references pass through untouched; everything
//! else that could be misread as syntax gets backslash-escaped.
//!
//! The pass is a pure fold over lines threading an immutable fence state;
//! malformed input (unterminated fences, unmatched backticks, unbalanced
//! brackets) degrades to treat-as-prose rather than erroring, preferring
//! over-escaping to under-escaping.

use crate::code_fence::{FenceState, advance_fence_state};
use crate::policy::is_preserved_tag;

/// Sanitize a markdown document for a component-syntax-sensitive renderer.
///
/// Pure mapping, no I/O, idempotent: applying it twice produces the same
/// output as applying it once.
pub fn sanitize_mdx(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    let mut state = FenceState::default();

    for line in input.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        let outcome = advance_fence_state(body, state);
        if outcome.skip_escaping || is_structural_line(body) {
            out.push_str(body);
        } else {
            sanitize_line_into(body, &mut out);
        }
        out.push_str(ending);
        state = outcome.next_state;
    }

    out
}

/// Splits a line produced by `split_inclusive('\n')` into its body and
/// line ending, keeping `\r\n` intact in the ending.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(stripped) = line.strip_suffix('\n') {
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        (stripped, &line[stripped.len()..])
    } else {
        (line, "")
    }
}

/// Whether the line opens with a markdown block marker that exempts it
/// from escaping: a heading (`#` to `######` then whitespace), a
/// blockquote marker, or a list bullet at line start.
///
/// Only the whole line is exempted; content after the marker is not
/// escaped separately. Deliberate simplification, kept as-is.
fn is_structural_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    match bytes.first().copied() {
        Some(b'#') => {
            let run = bytes.iter().take_while(|&&b| b == b'#').count();
            run <= 6 && bytes.get(run).is_some_and(|b| b.is_ascii_whitespace())
        }
        Some(b'>') | Some(b'-') | Some(b'*') | Some(b'+') => {
            bytes.get(1).is_some_and(|b| b.is_ascii_whitespace())
        }
        _ => false,
    }
}

/// Splits a non-fenced, non-structural line into alternating prose and
/// inline-code segments and escapes the prose ones.
///
/// An unmatched single backtick means no code span extends past end of
/// line: the remainder is treated as plain prose.
fn sanitize_line_into(line: &str, out: &mut String) {
    let mut rest = line;
    while let Some(open) = rest.find('`') {
        let Some(close) = rest[open + 1..].find('`') else {
            break;
        };
        escape_prose(&rest[..open], out);
        let span_end = open + 1 + close + 1;
        out.push_str(&rest[open..span_end]);
        rest = &rest[span_end..];
    }
    escape_prose(rest, out);
}

/// A tag-like sequence located at the start of a slice.
struct TagMatch<'a> {
    /// Tag name without the optional leading `/`.
    name: &'a str,
    /// Byte length of the whole match, both angle brackets included.
    len: usize,
}

/// Matches `<identifier ...>` syntax at the start of `s`: an optional
/// closing slash, a letter-initial identifier, and an attribute-like tail
/// running to the next closing bracket. Returns `None` when the bracket
/// never closes or no identifier follows.
fn match_tag(s: &str) -> Option<TagMatch<'_>> {
    let name_start = if s[1..].starts_with('/') { 2 } else { 1 };
    let body = s.get(name_start..)?;
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        .unwrap_or(body.len());
    let close_rel = body[name_len..].find('>')?;
    Some(TagMatch {
        name: &body[..name_len],
        len: name_start + name_len + close_rel + 1,
    })
}

/// Escapes a prose segment: tag-like sequences are classified under the
/// preserve policy, everything between them goes through the
/// character-level escaper.
fn escape_prose(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut cursor = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' && (i == 0 || bytes[i - 1] != b'\\') {
            if let Some(tag) = match_tag(&text[i..]) {
                escape_chars(&text[cursor..i], out);
                let matched = &text[i..i + tag.len];
                if is_preserved_tag(tag.name) {
                    out.push_str(matched);
                } else {
                    push_escaped_tag(matched, out);
                }
                i += tag.len;
                cursor = i;
                continue;
            }
        }
        i += 1;
    }
    escape_chars(&text[cursor..], out);
}

/// Rewrites the angle brackets of a non-preserved tag match to their
/// escaped forms, leaving everything between them untouched.
fn push_escaped_tag(tag: &str, out: &mut String) {
    let inner = &tag[1..tag.len() - 1];
    out.push('\\');
    out.push('<');
    out.push_str(inner);
    if !inner.ends_with('\\') {
        out.push('\\');
    }
    out.push('>');
}

/// Character-level escaping for text outside any protected span.
///
/// `{` and `}` are live syntax regardless of context and escape
/// unconditionally; a bare `<` not followed by a letter or `>` not
/// preceded by one covers stray comparison-like usages. A backslash
/// lookbehind keeps the pass idempotent.
fn escape_chars(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    for (i, ch) in text.char_indices() {
        let already_escaped = i > 0 && bytes[i - 1] == b'\\';
        if already_escaped {
            out.push(ch);
            continue;
        }
        match ch {
            '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '<' => {
                let letter_next = text[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic());
                if !letter_next {
                    out.push('\\');
                }
                out.push(ch);
            }
            '>' => {
                let letter_prev = i > 0 && bytes[i - 1].is_ascii_alphabetic();
                if !letter_prev {
                    out.push('\\');
                }
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}
