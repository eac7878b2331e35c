//! Static classification data for the tag-aware escaper.
//!
//! The preserve set and the API denylist are frozen constants initialized
//! once; classification never allocates beyond the lowercase lookup key.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// HTML-equivalent element names the escaper leaves untouched, matched
/// case-insensitively. Headings, lists, emphasis, media, form, tabular
/// and sectioning elements.
static PRESERVED_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Sectioning and grouping
        "html", "head", "body", "main", "header", "footer", "nav", "article", "aside", "section",
        "div", "span", "p", "hr", "pre", "blockquote", "address", "figure", "figcaption",
        "details", "summary",
        // Headings
        "h1", "h2", "h3", "h4", "h5", "h6",
        // Lists
        "ul", "ol", "li", "dl", "dt", "dd",
        // Inline text semantics
        "a", "em", "strong", "b", "i", "u", "s", "small", "sub", "sup", "mark", "abbr", "dfn",
        "q", "cite", "code", "kbd", "samp", "var", "br", "wbr", "del", "ins", "time",
        // Media and embedding
        "img", "picture", "source", "audio", "video", "track", "iframe", "canvas", "map", "area",
        // Forms
        "form", "fieldset", "legend", "label", "input", "button", "select", "option", "optgroup",
        "textarea", "output", "datalist", "progress", "meter",
        // Tables
        "table", "caption", "thead", "tbody", "tfoot", "tr", "th", "td", "col", "colgroup",
    ]
    .into_iter()
    .collect()
});

/// Placeholder-like tag names rewritten unconditionally in API-reference
/// content. These show up constantly in extracted generic signatures and
/// survive the general preserve policy (uppercase-initial, multi-letter).
pub(crate) const API_DENYLIST: &[&str] = &[
    "Type",
    "Key",
    "Value",
    "Generic",
    "Parameter",
    "Class",
    "Method",
    "Function",
    "Property",
    "ES",
];

/// Classify a tag name under the preserve policy.
///
/// A name survives when it is a recognized element (case-insensitive) or
/// when it looks like a component reference: uppercase-initial and longer
/// than one character. Single capital letters (`<T>`, `<K>`) are generic
/// type parameters in extracted signatures, not components, and fall
/// through to escaping.
pub fn is_preserved_tag(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if PRESERVED_ELEMENTS.contains(name.to_ascii_lowercase().as_str()) {
        return true;
    }
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_elements_are_preserved() {
        assert!(is_preserved_tag("div"));
        assert!(is_preserved_tag("code"));
        assert!(is_preserved_tag("h2"));
        assert!(is_preserved_tag("td"));
    }

    #[test]
    fn element_lookup_is_case_insensitive() {
        assert!(is_preserved_tag("DIV"));
        assert!(is_preserved_tag("Table"));
    }

    #[test]
    fn component_references_are_preserved() {
        assert!(is_preserved_tag("MyComponent"));
        assert!(is_preserved_tag("Foo"));
    }

    #[test]
    fn single_capital_letters_are_not_components() {
        assert!(!is_preserved_tag("T"));
        assert!(!is_preserved_tag("K"));
    }

    #[test]
    fn unknown_lowercase_names_are_escaped() {
        assert!(!is_preserved_tag("t"));
        assert!(!is_preserved_tag("widget"));
        assert!(!is_preserved_tag(""));
    }
}
