//! Asset resolution errors

use super::DeployError;

/// Creates a library not found error
pub fn library_not_found(name: impl Into<String>, dir: impl Into<String>) -> DeployError {
    DeployError::LibraryNotFound {
        name: name.into(),
        dir: dir.into(),
    }
}

/// Creates an invalid glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
