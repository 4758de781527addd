//! File system errors

use std::path::Path;

use super::DeployError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> DeployError {
    DeployError::FileNotFound { path: path.into() }
}

/// Creates a directory not found error
pub fn dir_not_found(path: impl Into<String>) -> DeployError {
    DeployError::DirectoryNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> DeployError {
    DeployError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a copy failed error
pub fn copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> DeployError {
    DeployError::CopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Maps an I/O error raised while reading `path`
///
/// `NotFound` becomes [`DeployError::FileNotFound`] so that a missing input file
/// is reported by name rather than as a bare I/O failure.
pub fn read_error(path: &Path, err: &std::io::Error) -> DeployError {
    if err.kind() == std::io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}
