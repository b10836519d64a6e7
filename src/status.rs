//! Run-level pass/fail state and its mapping to a process exit code

use crate::validator::Diagnostic;

/// Exit code for a run where every file passed
pub const EXIT_OK: i32 = 0;
/// Exit code for a run with at least one failing file
pub const EXIT_VALIDATION_FAILED: i32 = 1;
/// Exit code for a run aborted by a fatal error
pub const EXIT_FATAL: i32 = 2;

/// Accumulated outcome of a run. Moves from `Clean` to `Failed` on the
/// first failing diagnostic and never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Clean,
    Failed,
}

impl RunStatus {
    /// Fold one diagnostic into the status
    pub fn record(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.is_fail() {
            *self = RunStatus::Failed;
        }
    }

    pub fn is_failed(self) -> bool {
        self == RunStatus::Failed
    }

    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Clean => EXIT_OK,
            RunStatus::Failed => EXIT_VALIDATION_FAILED,
        }
    }

    /// Final summary line, without the leading blank line
    pub fn summary(self) -> &'static str {
        match self {
            RunStatus::Clean => "All front matter valid.",
            RunStatus::Failed => "Validation failed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Failure;
    use std::path::PathBuf;

    fn ok() -> Diagnostic {
        Diagnostic::Ok {
            path: PathBuf::from("a.md"),
        }
    }

    fn fail() -> Diagnostic {
        Diagnostic::Fail {
            path: PathBuf::from("b.md"),
            failure: Failure::NoFrontmatter,
        }
    }

    #[test]
    fn test_vacuous_run_is_clean() {
        let status = RunStatus::default();
        assert_eq!(status.exit_code(), 0);
        assert_eq!(status.summary(), "All front matter valid.");
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut status = RunStatus::default();
        status.record(&ok());
        assert!(!status.is_failed());
        status.record(&fail());
        status.record(&ok());
        assert!(status.is_failed());
        assert_eq!(status.exit_code(), 1);
        assert_eq!(status.summary(), "Validation failed.");
    }
}
