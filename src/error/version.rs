//! Build cache and version header errors

use super::DeployError;

/// Creates a build cache not found error
pub fn cache_not_found(path: impl Into<String>) -> DeployError {
    DeployError::CacheNotFound { path: path.into() }
}

/// Creates a missing cache key error
pub fn cache_key_missing(key: impl Into<String>, path: impl Into<String>) -> DeployError {
    DeployError::CacheKeyMissing {
        key: key.into(),
        path: path.into(),
    }
}

/// Creates a missing `#define` error
pub fn macro_not_found(name: impl Into<String>, path: impl Into<String>) -> DeployError {
    DeployError::MacroNotFound {
        name: name.into(),
        path: path.into(),
    }
}

/// Creates an incomplete version error listing the missing components
pub fn incomplete_version(path: impl Into<String>, missing: &[&str]) -> DeployError {
    DeployError::IncompleteVersion {
        path: path.into(),
        missing: missing.join(", "),
    }
}
