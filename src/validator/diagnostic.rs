//! Per-file validation outcome

use std::path::{Path, PathBuf};

use crate::schema::Issue;

/// Reason reported for a file without a frontmatter block
pub const NO_FRONTMATTER_MESSAGE: &str = "No front matter found";

/// Why a file failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No `---` delimited block at the top of the file
    NoFrontmatter,
    /// The collection schema rejected the record; never empty
    SchemaViolation(Vec<Issue>),
}

impl Failure {
    /// Human-readable reasons, one per line of output
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Failure::NoFrontmatter => vec![NO_FRONTMATTER_MESSAGE.to_string()],
            Failure::SchemaViolation(issues) => issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome for exactly one discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Ok { path: PathBuf },
    Fail { path: PathBuf, failure: Failure },
}

impl Diagnostic {
    pub fn fail(path: PathBuf, failure: Failure) -> Self {
        Diagnostic::Fail { path, failure }
    }

    pub fn path(&self) -> &Path {
        match self {
            Diagnostic::Ok { path } | Diagnostic::Fail { path, .. } => path,
        }
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Diagnostic::Fail { .. })
    }

    /// Failure reasons; empty for a passing file
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Diagnostic::Ok { .. } => Vec::new(),
            Diagnostic::Fail { failure, .. } => failure.reasons(),
        }
    }
}
