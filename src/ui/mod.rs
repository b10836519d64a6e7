//! Report presentation layer
//!
//! The validator streams its results through the [`Reporter`] trait:
//! - [`ConsoleReporter`] prints the line-oriented report, progress and OK
//!   lines to stdout, failures and the failure summary to stderr
//! - `NullReporter` (tests only) discards everything, for runs that only
//!   inspect the returned [`crate::validator::RunOutcome`]

use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use console::Style;

use crate::common::path_normalizer::PathNormalizer;
use crate::status::RunStatus;
use crate::validator::{Diagnostic, Failure};

/// Receives validation events in run order
pub trait Reporter {
    /// A collection is about to be validated
    fn collection_started(&mut self, name: &str, file_count: usize);

    /// One file has been checked
    fn diagnostic(&mut self, diagnostic: &Diagnostic);

    /// Every collection has been processed
    fn finished(&mut self, status: RunStatus);
}

/// Reporter that ignores every event
#[cfg(test)]
pub struct NullReporter;

#[cfg(test)]
impl Reporter for NullReporter {
    fn collection_started(&mut self, _name: &str, _file_count: usize) {}

    fn diagnostic(&mut self, _diagnostic: &Diagnostic) {}

    fn finished(&mut self, _status: RunStatus) {}
}

/// Line-oriented text report
///
/// ```text
///
/// Validating blog: 2 file(s)
///   OK   ../posts/hello.md
///   FAIL ../posts/draft.md:
///     - description: Required
///
/// Validation failed.
/// ```
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
    paths: PathNormalizer,
    styled: bool,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Report to the process streams; paths are shown relative to `cwd`.
    /// Labels are colored when the terminal supports it.
    pub fn stdio(cwd: &Path) -> Self {
        let mut reporter = Self::new(io::stdout(), io::stderr(), cwd);
        reporter.styled = true;
        reporter
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Plain-text reporter writing into arbitrary sinks
    pub fn new(out: O, err: E, cwd: &Path) -> Self {
        Self {
            out,
            err,
            paths: PathNormalizer::new(cwd),
            styled: false,
        }
    }

    /// Give back the sinks, e.g. to inspect captured output
    #[allow(dead_code)] // used in tests
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn label(&self, text: &str, style: &Style) -> String {
        if self.styled {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn collection_started(&mut self, name: &str, file_count: usize) {
        let name = self.label(name, &Style::new().bold());
        let _ = writeln!(self.out, "\nValidating {name}: {file_count} file(s)");
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let rel = self.paths.relative(diagnostic.path());
        match diagnostic {
            Diagnostic::Ok { .. } => {
                let ok = self.label("OK", &Style::new().green());
                let _ = writeln!(self.out, "  {ok}   {rel}");
            }
            Diagnostic::Fail { failure, .. } => {
                let fail = self.label("FAIL", &Style::new().red().bold().for_stderr());
                let reasons = diagnostic.reasons();
                match failure {
                    Failure::NoFrontmatter => {
                        let _ = writeln!(self.err, "  {fail} {rel}: {}", reasons.join("; "));
                    }
                    Failure::SchemaViolation(_) => {
                        let _ = writeln!(self.err, "  {fail} {rel}:");
                        for reason in reasons {
                            let _ = writeln!(self.err, "    - {reason}");
                        }
                    }
                }
            }
        }
    }

    fn finished(&mut self, status: RunStatus) {
        match status {
            RunStatus::Clean => {
                let _ = writeln!(self.out, "\n{}", status.summary());
                let _ = self.out.flush();
            }
            RunStatus::Failed => {
                let summary = self.label(status.summary(), &Style::new().red().for_stderr());
                let _ = writeln!(self.err, "\n{summary}");
                let _ = self.err.flush();
            }
        }
    }
}
