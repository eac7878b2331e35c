#![deny(missing_docs)]
//! docslate core: MDX-safe text transforms for generated documentation.
//!
//! Pure, synchronous, no I/O. The two entry points are [`sanitize_mdx`]
//! (general pass for every generated section) and [`clean_api_text`]
//! (narrower second pass for API-reference content).

/// Targeted cleaner for generated API-reference text.
pub mod api_clean;
/// Code fence detection utilities.
pub mod code_fence;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// Static tag classification data.
pub mod policy;
/// The general MDX sanitizer.
pub mod sanitize;

pub use api_clean::clean_api_text;
pub use code_fence::{FenceState, LineOutcome, advance_fence_state, is_fence_delimiter};
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use policy::is_preserved_tag;
pub use sanitize::sanitize_mdx;
