//! Collection schemas
//!
//! A schema is a pure predicate over a [`FrontmatterRecord`]: it either
//! accepts the record or returns every issue it found, in a stable order.
//! [`ObjectSchema`] is the declarative implementation used for the
//! built-in collections and for schemas declared in `frontcheck.yaml`.

mod builtin;
mod date;
mod object;

pub use builtin::{blog_schema, builtin_schema, examples_schema};
#[allow(unused_imports)] // FieldKind is used in tests
pub use object::{FieldKind, FieldSpec, ObjectSchema};

use std::fmt;

use crate::frontmatter::FrontmatterRecord;

/// Message used for a required field that is absent
pub const REQUIRED_MESSAGE: &str = "Required";

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Path segments from the record root to the offending value
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub fn new(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Issue attached to a top-level field
    pub fn field(name: &str, message: impl Into<String>) -> Self {
        Self::new(vec![name.to_string()], message)
    }

    /// Dotted path, e.g. `tags.0`
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

/// Validation contract between the validator and a collection's rules
pub trait Schema: fmt::Debug + Send + Sync {
    /// Check a record without modifying it
    ///
    /// # Errors
    ///
    /// Returns every violation found, in the schema's reporting order.
    fn validate(&self, record: &FrontmatterRecord) -> Result<(), Vec<Issue>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_uses_dotted_path() {
        let issue = Issue::new(vec!["tags".into(), "0".into()], "Expected string");
        assert_eq!(issue.path_string(), "tags.0");
        assert_eq!(issue.to_string(), "tags.0: Expected string");
    }

    #[test]
    fn test_field_issue() {
        let issue = Issue::field("description", REQUIRED_MESSAGE);
        assert_eq!(issue.to_string(), "description: Required");
    }
}
