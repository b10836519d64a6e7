//! Frontmatter extraction for Markdown content files
//!
//! Only a small YAML subset is understood, line by line:
//! - `key: value` scalars, with one surrounding pair of double quotes removed
//! - single-level inline arrays, `key: [a, "b", 'c']`
//! - the exact lowercase literals `true` and `false`
//!
//! Lines without a colon are ignored. Nested mappings, block sequences,
//! multi-line scalars and comments are not supported; a line such as
//! `# note: x` is read as the key `# note`. Dates and numbers stay strings
//! and are left to the schema layer.

mod parser;
mod value;

pub use parser::parse_frontmatter;
pub use value::{FrontmatterRecord, FrontmatterValue};
