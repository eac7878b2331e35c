//! Targeted cleaner for generated API-reference text.
//!
//! Extracted signatures are full of generic-type syntax (`Container<T>`,
//! `Map<Key, Value>`) that the general preserve policy would wave through
//! as component references. This narrower pass runs on API-reference
//! content after the general sanitizer and escapes those defensively:
//! a fixed denylist of placeholder-like names, generic parameters sitting
//! directly after an identifier, and opening tags that never get closed.

use std::collections::HashMap;

use crate::code_fence::{FenceState, advance_fence_state};
use crate::policy::API_DENYLIST;

/// Clean generated API-reference text.
///
/// Fence-aware and line-by-line like the general sanitizer; pure and
/// idempotent. Both passes must run for API-reference content, this one
/// second.
pub fn clean_api_text(input: &str) -> String {
    let mut later_closers = count_closing_tags(input);

    let mut out = String::with_capacity(input.len() + input.len() / 16);
    let mut state = FenceState::default();

    for line in input.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        let outcome = advance_fence_state(body, state);
        if outcome.skip_escaping {
            out.push_str(body);
        } else {
            // Closers on this line stop counting as "later"; a closer on
            // the opener's own line only counts when it sits after the
            // opener, which rule (b) checks directly.
            discount_line_closers(body, &mut later_closers);
            let line = substitute_denylist(body);
            let line = escape_generic_params(&line);
            escape_unclosed_tags(&line, &later_closers, &mut out);
        }
        out.push_str(ending);
        state = outcome.next_state;
    }

    out
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(stripped) = line.strip_suffix('\n') {
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        (stripped, &line[stripped.len()..])
    } else {
        (line, "")
    }
}

/// Literal substitution of the known-problematic placeholder tags.
///
/// Replacement targets never overlap their own output (`\<Type\>` no
/// longer contains `<Type>`), so repeated application is a no-op.
fn substitute_denylist(line: &str) -> String {
    let mut result = line.to_string();
    for name in API_DENYLIST {
        let needle = format!("<{name}>");
        if result.contains(&needle) {
            result = result.replace(&needle, &format!("\\<{name}\\>"));
        }
    }
    result
}

/// Escapes `<Identifier>` patterns sitting in generic-parameter position:
/// directly after an identifier character (`List<Item>`), or a bare
/// single capital letter anywhere (`<T>`).
fn escape_generic_params(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' && (i == 0 || bytes[i - 1] != b'\\') {
            if let Some(name_len) = plain_identifier_tag(&line[i..]) {
                let generic_position = i > 0 && bytes[i - 1].is_ascii_alphanumeric();
                let single_capital = name_len == 1 && bytes[i + 1].is_ascii_uppercase();
                if generic_position || single_capital {
                    out.push_str(&line[cursor..i]);
                    out.push('\\');
                    out.push('<');
                    out.push_str(&line[i + 1..i + 1 + name_len]);
                    out.push('\\');
                    out.push('>');
                    i += name_len + 2;
                    cursor = i;
                    continue;
                }
            }
        }
        i += 1;
    }
    out.push_str(&line[cursor..]);
    out
}

/// Matches `<identifier>` with no attributes at the start of `s`,
/// returning the identifier length.
fn plain_identifier_tag(s: &str) -> Option<usize> {
    let body = &s[1..];
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    if body[name_len..].starts_with('>') {
        Some(name_len)
    } else {
        None
    }
}

/// Escapes the opening bracket of tags that are not closed on their own
/// line and have no matching closing tag later in the document.
fn escape_unclosed_tags(line: &str, later_closers: &HashMap<String, usize>, out: &mut String) {
    let bytes = line.as_bytes();
    let mut cursor = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' && (i == 0 || bytes[i - 1] != b'\\') {
            if let Some((name, tag_len, self_closing)) = opening_tag(&line[i..]) {
                let closer = format!("</{name}>");
                let closed_here = line[i + tag_len..].contains(&closer);
                let closed_later = later_closers.get(name).is_some_and(|n| *n > 0);
                if !self_closing && !closed_here && !closed_later {
                    out.push_str(&line[cursor..i]);
                    out.push('\\');
                    cursor = i;
                }
                i += tag_len;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&line[cursor..]);
}

/// Matches an opening tag `<Name ...>` at the start of `s`. Returns the
/// name, the byte length of the match, and whether it self-closes.
fn opening_tag(s: &str) -> Option<(&str, usize, bool)> {
    let body = &s[1..];
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        .unwrap_or(body.len());
    let close_rel = body[name_len..].find('>')?;
    let tail = &body[name_len..name_len + close_rel];
    let self_closing = tail.ends_with('/');
    Some((&body[..name_len], 1 + name_len + close_rel + 1, self_closing))
}

/// Counts every closing tag name appearing outside fences. The main loop
/// discounts each line's closers as it passes so the map always holds the
/// closers on lines still ahead, making "lacks a later matching closing
/// tag" positional: a closer before the opener does not vouch for it.
fn count_closing_tags(input: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let mut state = FenceState::default();
    for line in input.lines() {
        let outcome = advance_fence_state(line, state);
        if !outcome.skip_escaping {
            for_each_closer(line, |name| {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            });
        }
        state = outcome.next_state;
    }
    counts
}

/// Removes a line's closing tags from the running "later" counts.
fn discount_line_closers(line: &str, counts: &mut HashMap<String, usize>) {
    for_each_closer(line, |name| {
        if let Some(n) = counts.get_mut(name) {
            *n = n.saturating_sub(1);
        }
    });
}

fn for_each_closer(line: &str, mut f: impl FnMut(&str)) {
    let mut rest = line;
    while let Some(pos) = rest.find("</") {
        let after = &rest[pos + 2..];
        if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let name_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
                .unwrap_or(after.len());
            if after[name_len..].starts_with('>') {
                f(&after[..name_len]);
            }
        }
        rest = &rest[pos + 2..];
    }
}
