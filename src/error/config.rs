//! Configuration errors

use super::FrontcheckError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> FrontcheckError {
    FrontcheckError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> FrontcheckError {
    FrontcheckError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> FrontcheckError {
    FrontcheckError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FrontcheckError {
    FrontcheckError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown schema error
pub fn unknown_schema(name: impl Into<String>) -> FrontcheckError {
    FrontcheckError::UnknownSchema { name: name.into() }
}
