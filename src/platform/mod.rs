//! Target platform profile
//!
//! The profile is selected once per run, either from the host OS or from
//! `--platform`, and decides:
//! - the plugin binary extension (`.so` or `.mll`)
//! - whether shared libraries are deployed and `LD_LIBRARY_PATH` is exported
//! - the executable suffix for the appleseed binaries

use std::fmt;

use clap::ValueEnum;

use crate::error::{Result, platform_not_supported};

/// Platform a deployment is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformProfile {
    /// Linux and other posix-like hosts
    #[value(name = "linux")]
    Posix,

    /// Windows hosts
    #[value(name = "windows")]
    Windows,
}

impl PlatformProfile {
    /// Detect the profile of the host running the deployment
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS` to a profile
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os.to_lowercase().as_str() {
            "linux" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            other => Err(platform_not_supported(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Posix => "linux",
            Self::Windows => "windows",
        }
    }

    /// Extension of the Maya plugin binary
    pub fn plugin_extension(self) -> &'static str {
        match self {
            Self::Posix => ".so",
            Self::Windows => ".mll",
        }
    }

    /// Whether the module file exports `LD_LIBRARY_PATH` and the `lib` directory is deployed
    pub fn uses_library_path(self) -> bool {
        matches!(self, Self::Posix)
    }

    /// File name of an executable on this platform
    pub fn executable_name(self, name: &str) -> String {
        match self {
            Self::Windows if !name.to_lowercase().ends_with(".exe") => format!("{name}.exe"),
            _ => name.to_string(),
        }
    }
}

impl fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
