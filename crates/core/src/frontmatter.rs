//! YAML frontmatter extraction.
//!
//! The sanitizer itself never sees frontmatter; callers strip it first
//! with this helper and re-attach their own header when writing.

use serde_yaml::Value as YamlValue;
use thiserror::Error;

/// Parsed frontmatter and the body that follows it.
#[derive(Debug)]
pub struct Frontmatter<'a> {
    /// Parsed YAML value; an empty mapping when the document has no
    /// frontmatter block.
    pub value: YamlValue,
    /// Document body with the frontmatter block removed.
    pub body: &'a str,
}

/// Errors emitted while extracting a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` with no closing delimiter before end of document.
    #[error("unterminated frontmatter block: missing closing '---'")]
    Unterminated,
    /// The block is not valid YAML.
    #[error("frontmatter is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Extracts a leading `---`-delimited YAML block.
///
/// The block must start on the very first line; anything else means the
/// document has no frontmatter and is returned whole as the body.
pub fn extract_frontmatter(input: &str) -> Result<Frontmatter<'_>, FrontmatterError> {
    let Some(after_open) = strip_delimiter_line(input) else {
        return Ok(Frontmatter {
            value: empty_mapping(),
            body: input,
        });
    };

    let mut cursor = 0usize;
    loop {
        let rest = &after_open[cursor..];
        if rest.is_empty() {
            return Err(FrontmatterError::Unterminated);
        }
        let line_end = rest.find('\n').map(|p| p + 1).unwrap_or(rest.len());
        let line = &rest[..line_end];
        if is_delimiter(line) {
            let block = &after_open[..cursor];
            let value = parse_block(block)?;
            return Ok(Frontmatter {
                value,
                body: &after_open[cursor + line_end..],
            });
        }
        cursor += line_end;
    }
}

fn parse_block(block: &str) -> Result<YamlValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(empty_mapping());
    }
    let value: YamlValue = serde_yaml::from_str(block)?;
    match value {
        YamlValue::Null => Ok(empty_mapping()),
        other => Ok(other),
    }
}

fn empty_mapping() -> YamlValue {
    YamlValue::Mapping(Default::default())
}

/// If the input begins with a `---` delimiter line, returns the text
/// after it.
fn strip_delimiter_line(input: &str) -> Option<&str> {
    let line_end = input.find('\n')?;
    if is_delimiter(&input[..line_end + 1]) {
        Some(&input[line_end + 1..])
    } else {
        None
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_without_frontmatter_is_whole_body() {
        let result = extract_frontmatter("# Title\nBody").unwrap();
        assert_eq!(result.body, "# Title\nBody");
        assert_eq!(result.value, YamlValue::Mapping(Default::default()));
    }

    #[test]
    fn parses_leading_block() {
        let input = "---\nid: api\ntitle: API Reference\n---\n# Content\n";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.body, "# Content\n");
        assert_eq!(
            result.value.get("id").and_then(YamlValue::as_str),
            Some("api")
        );
        assert_eq!(
            result.value.get("title").and_then(YamlValue::as_str),
            Some("API Reference")
        );
    }

    #[test]
    fn empty_block_yields_empty_mapping() {
        let result = extract_frontmatter("---\n---\nBody").unwrap();
        assert_eq!(result.value, YamlValue::Mapping(Default::default()));
        assert_eq!(result.body, "Body");
    }

    #[test]
    fn delimiter_must_open_the_document() {
        let input = "intro\n---\nid: x\n---\n";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.body, input);
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let err = extract_frontmatter("---\ntitle: test\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = extract_frontmatter("---\nbad: [unterminated\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)));
    }

    #[test]
    fn crlf_delimiters_are_accepted() {
        let input = "---\r\nid: dev\r\n---\r\nBody\r\n";
        let result = extract_frontmatter(input).unwrap();
        assert_eq!(result.body, "Body\r\n");
        assert_eq!(
            result.value.get("id").and_then(YamlValue::as_str),
            Some("dev")
        );
    }
}
