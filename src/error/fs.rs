//! File system errors

use super::FrontcheckError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FrontcheckError {
    FrontcheckError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
