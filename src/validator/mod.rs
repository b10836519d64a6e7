//! Validation pipeline: collect, parse, check, report
//!
//! [`run`] walks every collection of a registry in order and produces one
//! [`Diagnostic`] per discovered file. Per-file problems never abort the
//! run; only a file that cannot be read does.

mod diagnostic;

pub use diagnostic::{Diagnostic, Failure};

use std::path::PathBuf;

use crate::collector::collect_markdown_files;
use crate::error::{Result, file_read_failed};
use crate::frontmatter::parse_frontmatter;
use crate::registry::{Collection, SchemaRegistry};
use crate::schema::Schema;
use crate::status::RunStatus;
use crate::ui::Reporter;

/// Knobs for a validation run
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Sort discovered files by name instead of using directory order
    pub sorted: bool,
}

/// Diagnostics for one collection, in file discovery order
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub name: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectionReport {
    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_fail())
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub collections: Vec<CollectionReport>,
    pub status: RunStatus,
}

impl RunOutcome {
    pub fn file_count(&self) -> usize {
        self.collections.iter().map(|c| c.diagnostics.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.collections.iter().map(|c| c.failures().count()).sum()
    }
}

/// Validate every collection in `registry`, streaming results to `reporter`.
///
/// # Errors
///
/// Returns `FileReadFailed` if a discovered file cannot be read. Diagnostics
/// already emitted to the reporter stay emitted.
pub fn run(
    registry: &SchemaRegistry,
    options: ValidateOptions,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::default();
    tracing::debug!(collections = registry.len(), sorted = options.sorted, "starting run");

    for collection in registry.collections() {
        let report = validate_collection(collection, options, &mut outcome.status, reporter)?;
        tracing::debug!(
            collection = %report.name,
            failures = report.failures().count(),
            "collection done"
        );
        outcome.collections.push(report);
    }

    tracing::debug!(
        files = outcome.file_count(),
        failures = outcome.failure_count(),
        failed = outcome.status.is_failed(),
        "validation finished"
    );
    reporter.finished(outcome.status);
    Ok(outcome)
}

fn validate_collection(
    collection: &Collection,
    options: ValidateOptions,
    status: &mut RunStatus,
    reporter: &mut dyn Reporter,
) -> Result<CollectionReport> {
    let files = collect_markdown_files(&collection.root, options.sorted);
    tracing::debug!(
        collection = %collection.name,
        root = %collection.root.display(),
        count = files.len(),
        "validating collection"
    );
    reporter.collection_started(&collection.name, files.len());

    let mut diagnostics = Vec::with_capacity(files.len());
    for path in files {
        let diagnostic = validate_file(path, collection.schema.as_ref())?;
        status.record(&diagnostic);
        reporter.diagnostic(&diagnostic);
        diagnostics.push(diagnostic);
    }

    Ok(CollectionReport {
        name: collection.name.clone(),
        diagnostics,
    })
}

/// Read, parse and check a single file.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns `FileReadFailed` if the file cannot be read.
pub fn validate_file(path: PathBuf, schema: &dyn Schema) -> Result<Diagnostic> {
    let bytes = std::fs::read(&path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(check_content(path, &content, schema))
}

/// Check already-loaded content; `path` only labels the diagnostic.
pub fn check_content(path: PathBuf, content: &str, schema: &dyn Schema) -> Diagnostic {
    let Some(record) = parse_frontmatter(content) else {
        tracing::debug!(path = %path.display(), "no frontmatter block");
        return Diagnostic::fail(path, Failure::NoFrontmatter);
    };

    tracing::trace!(path = %path.display(), fields = record.len(), record = %record, "parsed frontmatter");

    match schema.validate(&record) {
        Ok(()) => Diagnostic::Ok { path },
        Err(issues) => {
            tracing::debug!(path = %path.display(), issues = issues.len(), "schema rejected record");
            Diagnostic::fail(path, Failure::SchemaViolation(issues))
        }
    }
}
