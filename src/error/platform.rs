//! Platform errors

use super::DeployError;

/// Creates a platform not supported error
pub fn not_supported(platform: impl Into<String>) -> DeployError {
    DeployError::PlatformNotSupported {
        platform: platform.into(),
    }
}
