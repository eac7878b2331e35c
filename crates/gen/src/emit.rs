//! File emission and in-place cleaning for the generated docs tree.
//!
//! Every function here follows the same error policy: a single file's
//! failure is logged as a warning and reported as `false`, never
//! propagated — one bad file must not abort generation of the rest of
//! the site.

use std::fs;
use std::path::Path;

use docslate_core::{clean_api_text, sanitize_mdx};

use crate::sections::{Section, prepare_content, with_frontmatter};

/// Sanitize raw section content and write it to `<docs_dir>/<id>.md`
/// with its frontmatter header.
pub fn write_section(docs_dir: &Path, section: Section, raw: &str) -> bool {
    let document = with_frontmatter(section, &prepare_content(section, raw));
    let path = docs_dir.join(format!("{}.md", section.id()));
    match fs::write(&path, document) {
        Ok(()) => {
            log::info!("generated {} content", section.id());
            true
        }
        Err(err) => {
            log::warn!("error writing {}: {err}", path.display());
            false
        }
    }
}

/// Write a pre-rendered index page to `<docs_dir>/index.md`.
pub fn write_index(docs_dir: &Path, page: &str) -> bool {
    let path = docs_dir.join("index.md");
    match fs::write(&path, page) {
        Ok(()) => {
            log::info!("generated index.md");
            true
        }
        Err(err) => {
            log::warn!("error writing {}: {err}", path.display());
            false
        }
    }
}

/// Clean a generated API-reference file in place.
///
/// Reads the whole file, applies the general sanitizer and the targeted
/// API cleaner, and writes the result back when it changed.
///
/// Not a fixed point after one rewrite: the cleaner escapes only the
/// opening bracket of an unclosed tag, and the next run's sanitizer may
/// then escape the orphaned closing bracket. Repeated cleaning settles by
/// the second rewrite and only ever adds escapes.
pub fn clean_api_file(path: &Path) -> bool {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("error reading {}: {err}", path.display());
            return false;
        }
    };

    let cleaned = clean_api_text(&sanitize_mdx(&content));
    if cleaned == content {
        return true;
    }

    match fs::write(path, &cleaned) {
        Ok(()) => {
            log::debug!("cleaned API reference at {}", path.display());
            true
        }
        Err(err) => {
            log::warn!("error writing {}: {err}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_section_with_frontmatter_and_sanitized_body() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_section(
            dir.path(),
            Section::Overview,
            "Use {config} carefully"
        ));

        let written = fs::read_to_string(dir.path().join("overview.md")).unwrap();
        assert!(written.starts_with("---\nid: overview\ntitle: Overview\n---\n\n"));
        assert!(written.contains("Use \\{config\\} carefully"));
    }

    #[test]
    fn write_to_missing_directory_is_nonfatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(!write_section(&missing, Section::Overview, "body"));
    }

    #[test]
    fn cleans_api_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.md");
        fs::write(&path, "accepts Container<Item> values\n").unwrap();

        assert!(clean_api_file(&path));
        let cleaned = fs::read_to_string(&path).unwrap();
        assert_eq!(cleaned, "accepts Container\\<Item\\> values\n");
    }

    #[test]
    fn clean_leaves_safe_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.md");
        fs::write(&path, "plain text, nothing to escape\n").unwrap();

        assert!(clean_api_file(&path));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "plain text, nothing to escape\n");
    }

    #[test]
    fn repeated_cleaning_settles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.md");
        fs::write(&path, "see <Widget kind=\"x\"> here\n").unwrap();

        assert!(clean_api_file(&path));
        assert!(clean_api_file(&path));
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(second, "see \\<Widget kind=\"x\"\\> here\n");

        assert!(clean_api_file(&path));
        let third = fs::read_to_string(&path).unwrap();
        assert_eq!(second, third);
    }

    #[test]
    fn missing_file_is_nonfatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!clean_api_file(&dir.path().join("absent.md")));
    }

    #[test]
    fn writes_index_page() {
        let dir = tempfile::tempdir().unwrap();
        let page = crate::sections::render_index("Demo", "desc", &[Section::Overview]);
        assert!(write_index(dir.path(), &page));
        let written = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(written.contains("# Demo Documentation"));
    }
}
