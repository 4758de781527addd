//! Version resolution
//!
//! This module handles:
//! - Locating the Maya include directory through the CMake build cache
//! - Reading the Maya API version from the Maya SDK headers
//! - Reading the plugin's own version from its version header

pub mod cache;
pub mod header;

use std::path::{Path, PathBuf};

pub use cache::CMakeCache;
pub use header::VersionTuple;

use crate::error::Result;

/// Resolve the include directory recorded under `key` in the build cache
pub fn resolve_include_dir(build_dir: &Path, key: &str) -> Result<PathBuf> {
    let cache = CMakeCache::load(build_dir)?;
    cache.require(key).map(PathBuf::from)
}

/// Resolve the Maya API version for a build directory
///
/// `header` is relative to the resolved include directory (e.g. `maya/MTypes.h`).
pub fn resolve_maya_version(
    build_dir: &Path,
    key: &str,
    header: &Path,
    macro_name: &str,
) -> Result<String> {
    let include_dir = resolve_include_dir(build_dir, key)?;
    header::load_api_version(&include_dir.join(header), macro_name)
}

/// Read the plugin version from its header, failing if any component is missing
pub fn resolve_project_version(path: &Path, prefix: &str) -> Result<VersionTuple> {
    VersionTuple::load(path, prefix)?.require_complete(path)
}
