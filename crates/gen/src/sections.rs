//! Section scaffolding for the generated docs tree.
//!
//! The generated site has a fixed set of sections plus an index page.
//! Everything here is pure string assembly; file writing lives in
//! [`crate::emit`].

use std::fmt::Write as _;

use docslate_core::{clean_api_text, sanitize_mdx};

/// The fixed documentation sections, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Project overview.
    Overview,
    /// Installation guide.
    Installation,
    /// API reference extracted from source.
    Api,
    /// Development guide.
    Development,
    /// Contributing guidelines.
    Contributing,
}

impl Section {
    /// Every section, in generation order.
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Installation,
        Section::Api,
        Section::Development,
        Section::Contributing,
    ];

    /// Stable id used for the output filename and frontmatter.
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Installation => "installation",
            Section::Api => "api",
            Section::Development => "development",
            Section::Contributing => "contributing",
        }
    }

    /// Human-readable title used in frontmatter and index links.
    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Installation => "Installation",
            Section::Api => "API Reference",
            Section::Development => "Development",
            Section::Contributing => "Contributing",
        }
    }

    /// Look a section up by its id.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// API-reference content gets the extra cleaning pass.
    pub fn is_api_reference(self) -> bool {
        matches!(self, Section::Api)
    }
}

/// Sanitize raw section content for the component-syntax renderer.
///
/// Every section runs through the general sanitizer; API-reference
/// content additionally gets the targeted cleaner, second.
pub fn prepare_content(section: Section, raw: &str) -> String {
    let sanitized = sanitize_mdx(raw);
    if section.is_api_reference() {
        clean_api_text(&sanitized)
    } else {
        sanitized
    }
}

/// Prepend the section's frontmatter header to a body.
pub fn with_frontmatter(section: Section, body: &str) -> String {
    format!(
        "---\nid: {}\ntitle: {}\n---\n\n{}",
        section.id(),
        section.title(),
        body
    )
}

/// Render the index page linking the sections actually generated.
pub fn render_index(project_name: &str, description: &str, present: &[Section]) -> String {
    let mut page = String::new();
    write!(
        page,
        "---\nslug: /\nid: index\ntitle: {project_name} Documentation\n---\n\n"
    )
    .ok();

    writeln!(page, "# {project_name} Documentation\n").ok();
    writeln!(page, "{description}\n").ok();

    writeln!(page, "## Getting Started\n").ok();
    for section in [Section::Overview, Section::Installation] {
        if present.contains(&section) {
            writeln!(page, "- [{}]({}.md)", section.title(), section.id()).ok();
        }
    }

    writeln!(page, "\n## Reference\n").ok();
    for section in [Section::Api, Section::Development, Section::Contributing] {
        if present.contains(&section) {
            writeln!(page, "- [{}]({}.md)", section.title(), section.id()).ok();
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_and_titles_are_stable() {
        assert_eq!(Section::Api.id(), "api");
        assert_eq!(Section::Api.title(), "API Reference");
        assert_eq!(Section::from_id("development"), Some(Section::Development));
        assert_eq!(Section::from_id("unknown"), None);
    }

    #[test]
    fn frontmatter_header_shape() {
        let out = with_frontmatter(Section::Overview, "# Overview\n");
        assert!(out.starts_with("---\nid: overview\ntitle: Overview\n---\n\n# Overview\n"));
    }

    #[test]
    fn api_content_gets_both_passes() {
        // `<Item>` survives the general preserve policy but sits in
        // generic-parameter position, so the API cleaner catches it.
        let out = prepare_content(Section::Api, "takes Container<Item> and {opts}");
        assert_eq!(out, "takes Container\\<Item\\> and \\{opts\\}");
    }

    #[test]
    fn non_api_content_gets_only_the_general_pass() {
        let out = prepare_content(Section::Overview, "takes Container<Item> and {opts}");
        assert_eq!(out, "takes Container<Item> and \\{opts\\}");
    }

    #[test]
    fn index_links_only_present_sections() {
        let page = render_index(
            "Demo",
            "A demo project.",
            &[Section::Overview, Section::Api],
        );
        assert!(page.contains("title: Demo Documentation"));
        assert!(page.contains("- [Overview](overview.md)"));
        assert!(page.contains("- [API Reference](api.md)"));
        assert!(!page.contains("installation.md"));
        assert!(!page.contains("contributing.md"));
    }

    #[test]
    fn frontmatter_round_trips_through_core_extraction() {
        let doc = with_frontmatter(Section::Contributing, "guidelines\n");
        let extracted = docslate_core::extract_frontmatter(&doc).unwrap();
        assert_eq!(
            extracted
                .value
                .get("id")
                .and_then(serde_yaml::Value::as_str),
            Some("contributing")
        );
        assert_eq!(extracted.body, "\nguidelines\n");
    }
}
