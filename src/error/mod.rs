//! Error types and handling for the deploy tool
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`version`]: Build cache and version header errors
//! - [`platform`]: Platform errors
//! - [`config`]: Configuration errors
//! - [`assets`]: Asset resolution errors

pub mod assets;
pub mod config;
pub mod fs;
pub mod platform;
pub mod version;

pub use assets::{invalid_glob, library_not_found};
pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{
    copy_failed, dir_create_failed, dir_not_found, not_found as file_not_found,
    read_failed as file_read_failed, write_failed as file_write_failed,
};
pub use platform::not_supported as platform_not_supported;
pub use version::{cache_key_missing, cache_not_found, incomplete_version, macro_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for deploy operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeployError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(deploy::fs::not_found))]
    FileNotFound { path: String },

    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(deploy::fs::dir_not_found),
        help("Check --project-root and --appleseed-dir point at complete trees")
    )]
    DirectoryNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(deploy::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(deploy::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(deploy::fs::dir_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(deploy::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(deploy::fs::io_error))]
    IoError { message: String },

    // Version errors
    #[error("Build cache not found: {path}")]
    #[diagnostic(
        code(deploy::version::cache_not_found),
        help("Pass the CMake build directory with --build-dir")
    )]
    CacheNotFound { path: String },

    #[error("Key '{key}' not found in build cache: {path}")]
    #[diagnostic(
        code(deploy::version::cache_key_missing),
        help("Re-run CMake so that the Maya include directory is recorded in the cache")
    )]
    CacheKeyMissing { key: String, path: String },

    #[error("No '#define {name}' line in {path}")]
    #[diagnostic(code(deploy::version::macro_not_found))]
    MacroNotFound { name: String, path: String },

    #[error("Incomplete version in {path}: missing {missing}")]
    #[diagnostic(
        code(deploy::version::incomplete),
        help("The header must define the MAJOR, MINOR and PATCH macros")
    )]
    IncompleteVersion { path: String, missing: String },

    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(deploy::platform::not_supported),
        help("Supported platforms: linux, windows (override with --platform)")
    )]
    PlatformNotSupported { platform: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(deploy::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(deploy::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(deploy::config::invalid))]
    ConfigInvalid { message: String },

    // Asset errors
    #[error("No library matching '{name}' in {dir}")]
    #[diagnostic(
        code(deploy::assets::library_not_found),
        help("Check the appleseed installation or the 'libraries' list in the deploy configuration")
    )]
    LibraryNotFound { name: String, dir: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(deploy::assets::invalid_glob))]
    InvalidGlob { pattern: String, reason: String },
}

impl From<std::io::Error> for DeployError {
    fn from(err: std::io::Error) -> Self {
        DeployError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeployError {
    fn from(err: serde_yaml::Error) -> Self {
        DeployError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for DeployError {
    fn from(err: walkdir::Error) -> Self {
        DeployError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = DeployError::FileNotFound {
            path: "LICENSE.txt".to_string(),
        };
        assert_eq!(err.to_string(), "File not found: LICENSE.txt");
    }

    #[test]
    fn test_error_code() {
        let err = DeployError::PlatformNotSupported {
            platform: "macos".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("deploy::platform::not_supported".to_string())
        );
    }

    #[test]
    fn test_error_help() {
        let err = cache_key_missing("MAYA_INCLUDE_DIR", "/build/CMakeCache.txt");
        assert!(err.help().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeployError = io_err.into();
        assert!(matches!(err, DeployError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: DeployError = parse_result.unwrap_err().into();
        assert!(matches!(err, DeployError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_cache_key_missing,
        cache_key_missing("MAYA_INCLUDE_DIR", "/build/CMakeCache.txt"),
        "MAYA_INCLUDE_DIR",
        "/build/CMakeCache.txt"
    );

    test_error_contains!(
        test_cache_not_found,
        cache_not_found("/build/CMakeCache.txt"),
        "Build cache not found"
    );

    test_error_contains!(
        test_macro_not_found,
        macro_not_found("MAYA_API_VERSION", "MTypes.h"),
        "#define MAYA_API_VERSION",
        "MTypes.h"
    );

    test_error_contains!(
        test_incomplete_version,
        incomplete_version("version.h", &["MINOR", "PATCH"]),
        "missing MINOR, PATCH"
    );

    test_error_contains!(
        test_platform_not_supported,
        platform_not_supported("macos"),
        "Platform not supported: macos"
    );

    test_error_contains!(
        test_library_not_found,
        library_not_found("libHalf", "/opt/appleseed/lib"),
        "libHalf",
        "/opt/appleseed/lib"
    );

    test_error_contains!(
        test_invalid_glob,
        invalid_glob("[*.oso", "unclosed class"),
        "Invalid glob pattern"
    );

    test_error_contains!(
        test_copy_failed,
        copy_failed("a.oso", "shaders", "permission denied"),
        "Failed to copy a.oso to shaders",
        "permission denied"
    );

    test_error_contains!(
        test_dir_not_found,
        dir_not_found("/project/icons"),
        "Directory not found"
    );

    test_error_contains!(
        test_config_parse_failed,
        config_parse_failed("deploy.yaml", "invalid YAML"),
        "Failed to parse configuration file"
    );

    test_error_contains!(
        test_config_read_failed,
        config_read_failed("deploy.yaml", "permission denied"),
        "Failed to read configuration file"
    );

    test_error_contains!(
        test_config_invalid,
        config_invalid("plugin_name must not be empty"),
        "Invalid configuration"
    );

    test_error_contains!(
        test_file_read_failed,
        file_read_failed("/path/to/file.txt", "permission denied"),
        "Failed to read file"
    );

    test_error_contains!(
        test_file_write_failed,
        file_write_failed("/path/to/file.txt", "disk full"),
        "Failed to write file"
    );

    test_error_contains!(
        test_file_not_found,
        file_not_found("/path/to/file.txt"),
        "File not found"
    );

    test_error_contains!(
        test_dir_create_failed,
        dir_create_failed("/dest/bin", "read-only file system"),
        "Failed to create directory"
    );
}
