#![deny(missing_docs)]
//! docslate generation glue: section scaffolding, prompt templating,
//! config loading, and file emission around the `docslate-core`
//! sanitizer.

/// YAML config loading with warn-and-default fallback.
pub mod config;
/// File emission and in-place API-reference cleaning.
pub mod emit;
/// AI enhancement prompt assembly.
pub mod prompt;
/// Section table, sanitize pipeline, and page rendering.
pub mod sections;

pub use config::{ConfigError, SiteConfig, load_config, load_config_or_default};
pub use emit::{clean_api_file, write_index, write_section};
pub use prompt::enhancement_prompt;
pub use sections::{Section, prepare_content, render_index, with_frontmatter};
