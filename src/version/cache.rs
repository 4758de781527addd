//! CMake cache (`CMakeCache.txt`) reader
//!
//! The cache is a line-oriented `KEY:TYPE=VALUE` file. Comment lines start
//! with `//` or `#`. Only the key and value matter here; the type is kept
//! for diagnostics.

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// File name of the cache inside a CMake build directory
pub const CACHE_FILE_NAME: &str = "CMakeCache.txt";

/// One `KEY:TYPE=VALUE` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub kind: Option<String>,
    pub value: String,
}

/// Parsed CMake cache
#[derive(Debug, Clone, Default)]
pub struct CMakeCache {
    path: PathBuf,
    entries: Vec<CacheEntry>,
}

impl CMakeCache {
    /// Load `CMakeCache.txt` from a build directory
    pub fn load(build_dir: &Path) -> Result<Self> {
        let path = build_dir.join(CACHE_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::cache_not_found(path.display().to_string())
            } else {
                error::file_read_failed(path.display().to_string(), e.to_string())
            }
        })?;

        let mut cache = Self::parse(&content);
        cache.path = path;
        Ok(cache)
    }

    /// Parse cache content; lines without `=` are ignored
    pub fn parse(content: &str) -> Self {
        let entries = content.lines().filter_map(parse_line).collect();
        Self {
            path: PathBuf::new(),
            entries,
        }
    }

    /// Value of the first entry with the given key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Value of `key`, or a [`crate::error::DeployError::CacheKeyMissing`] error
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| error::cache_key_missing(key, self.path.display().to_string()))
    }
}

fn parse_line(line: &str) -> Option<CacheEntry> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
        return None;
    }

    let (lhs, value) = line.split_once('=')?;
    let (key, kind) = match lhs.split_once(':') {
        Some((key, kind)) => (key, Some(kind.trim().to_string())),
        None => (lhs, None),
    };

    Some(CacheEntry {
        key: key.trim().to_string(),
        kind,
        value: value.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeployError;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# This is the CMakeCache file.
// Path to a file.
CMAKE_BUILD_TYPE:STRING=Release
MAYA_INCLUDE_DIR:PATH=/usr/autodesk/maya2017/include
MAYA_INCLUDE_DIR_EXTRA:PATH=/unused

// Windows path with a drive letter
OTHER_DIR:PATH=C:/Program Files/Autodesk/Maya2018/include
";

    #[test]
    fn test_get_returns_trimmed_value_after_first_equals() {
        let cache = CMakeCache::parse(SAMPLE);
        assert_eq!(
            cache.get("MAYA_INCLUDE_DIR"),
            Some("/usr/autodesk/maya2017/include")
        );
        assert_eq!(
            cache.get("OTHER_DIR"),
            Some("C:/Program Files/Autodesk/Maya2018/include")
        );
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let cache = CMakeCache::parse("FLAGS:STRING= -DA=1 -DB=2  \n");
        assert_eq!(cache.get("FLAGS"), Some("-DA=1 -DB=2"));
    }

    #[test]
    fn test_first_entry_wins() {
        let cache = CMakeCache::parse("KEY:PATH=/first\nKEY:PATH=/second\n");
        assert_eq!(cache.get("KEY"), Some("/first"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let cache = CMakeCache::parse(SAMPLE);
        assert_eq!(cache.entries.len(), 4);
        assert_eq!(cache.entries[0].kind.as_deref(), Some("STRING"));
    }

    #[test]
    fn test_key_is_not_matched_by_prefix() {
        let cache = CMakeCache::parse("MAYA_INCLUDE_DIR_EXTRA:PATH=/unused\n");
        assert_eq!(cache.get("MAYA_INCLUDE_DIR"), None);
    }

    #[test]
    fn test_require_missing_key() {
        let cache = CMakeCache::parse("CMAKE_BUILD_TYPE:STRING=Release\n");
        let err = cache.require("MAYA_INCLUDE_DIR").unwrap_err();
        assert!(matches!(err, DeployError::CacheKeyMissing { .. }));
    }

    #[test]
    fn test_load_from_build_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CACHE_FILE_NAME), SAMPLE).unwrap();

        let cache = CMakeCache::load(temp.path()).unwrap();
        assert_eq!(cache.path, temp.path().join(CACHE_FILE_NAME));
        assert_eq!(cache.get("CMAKE_BUILD_TYPE"), Some("Release"));
    }

    #[test]
    fn test_load_missing_cache() {
        let temp = TempDir::new().unwrap();
        let err = CMakeCache::load(temp.path()).unwrap_err();
        assert!(matches!(err, DeployError::CacheNotFound { .. }));
    }
}
