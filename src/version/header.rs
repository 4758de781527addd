//! `#define` scanning for C headers

use std::fmt;
use std::path::Path;

use crate::error::{self, Result};

/// Number of characters kept from the `MAYA_API_VERSION` value (e.g. `20170000` -> `2017`)
const MAYA_VERSION_LEN: usize = 4;

/// A (major, minor, patch) version read from a project header
///
/// Components that are not defined in the header hold [`VersionTuple::MISSING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTuple {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl VersionTuple {
    pub const MISSING: i64 = -1;

    /// Scan header text for `#define <PREFIX>_MAJOR|MINOR|PATCH <int>`
    ///
    /// Lines may appear in any order and be mixed with unrelated lines. A
    /// component that is absent, or whose value is not an integer literal,
    /// stays at [`VersionTuple::MISSING`].
    pub fn parse(content: &str, prefix: &str) -> Self {
        let mut version = Self {
            major: Self::MISSING,
            minor: Self::MISSING,
            patch: Self::MISSING,
        };

        for line in content.lines() {
            let mut tokens = line.split_whitespace();
            if tokens.next() != Some("#define") {
                continue;
            }
            let (Some(name), Some(value)) = (tokens.next(), tokens.next()) else {
                continue;
            };
            let Some(component) = name
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('_'))
            else {
                continue;
            };
            let Ok(value) = value.parse::<i64>() else {
                continue;
            };

            match component {
                "MAJOR" => version.major = value,
                "MINOR" => version.minor = value,
                "PATCH" => version.patch = value,
                _ => {}
            }
        }

        version
    }

    /// Read and parse a version header
    pub fn load(path: &Path, prefix: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| error::fs::read_error(path, &e))?;
        Ok(Self::parse(&content, prefix))
    }

    /// Names of the components still at [`VersionTuple::MISSING`]
    pub fn missing_components(&self) -> Vec<&'static str> {
        [
            ("MAJOR", self.major),
            ("MINOR", self.minor),
            ("PATCH", self.patch),
        ]
        .into_iter()
        .filter(|(_, value)| *value == Self::MISSING)
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail with [`crate::error::DeployError::IncompleteVersion`] unless all components were found
    pub fn require_complete(self, path: &Path) -> Result<Self> {
        let missing = self.missing_components();
        if missing.is_empty() {
            Ok(self)
        } else {
            Err(error::incomplete_version(
                path.display().to_string(),
                &missing,
            ))
        }
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Find the value of `#define <name>` in header text
///
/// Returns the last whitespace-separated token of the first `#define` line
/// mentioning `name`, truncated to four characters. The value is not checked
/// to be numeric.
pub fn find_api_version(content: &str, name: &str) -> Option<String> {
    content
        .lines()
        .find(|line| line.contains("#define") && line.contains(name))
        .and_then(|line| line.split_whitespace().next_back())
        .map(|token| token.chars().take(MAYA_VERSION_LEN).collect())
}

/// Read a header and extract the API version defined by `name`
pub fn load_api_version(path: &Path, name: &str) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| error::fs::read_error(path, &e))?;
    find_api_version(&content, name)
        .ok_or_else(|| error::macro_not_found(name, path.display().to_string()))
}
