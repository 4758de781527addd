//! Common file system operations with unified error handling
//!
//! - [`ensure_dir`]: create a directory and its ancestors
//! - [`copy_file_into`]: copy one file into a directory
//! - [`merge_tree`]: non-deleting recursive directory merge
//! - [`copy_matching`]: flat copy of the files matching a glob

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};

/// Create `path` and any missing ancestors
///
/// Returns `true` when the directory was created, `false` when it already existed.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)
        .map_err(|e| error::dir_create_failed(path.display().to_string(), e.to_string()))?;
    Ok(true)
}

/// Copy `source` to the exact path `target`, overwriting it
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(error::file_not_found(source.display().to_string()));
    }
    fs::copy(source, target).map_err(|e| {
        error::copy_failed(
            source.display().to_string(),
            target.display().to_string(),
            e.to_string(),
        )
    })?;
    Ok(())
}

/// Copy `source` into `dir`, keeping its file name
///
/// Returns the path of the copied file.
pub fn copy_file_into(source: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| error::file_not_found(source.display().to_string()))?;
    let target = dir.join(file_name);
    copy_file(source, &target)?;
    Ok(target)
}

/// Recursively merge `src` into `dst`
///
/// Files present in both trees are overwritten by the source version; files
/// only present in `dst` are left alone. Symlinks are followed and copied as
/// regular files. Returns the copied files in `dst`, in walk order.
pub fn merge_tree(src: &Path, dst: &Path) -> Result<Vec<PathBuf>> {
    if !src.is_dir() {
        return Err(error::dir_not_found(src.display().to_string()));
    }
    ensure_dir(dst)?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
    {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied.push(target);
        }
    }

    Ok(copied)
}

/// Copy the files directly inside `src` whose name matches `pattern` into `dst`
///
/// Subdirectories are not searched and the copies are flattened into `dst`.
/// Returns the copied files in `dst`, sorted by name. A missing `src` matches
/// nothing.
pub fn copy_matching(src: &Path, pattern: &str, dst: &Path) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(pattern).map_err(|e| error::invalid_glob(pattern, e.to_string()))?;
    if !src.is_dir() {
        return Ok(Vec::new());
    }
    ensure_dir(dst)?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if glob.matched(&CandidatePath::from(&*name)).is_none() {
            continue;
        }
        copied.push(copy_file_into(entry.path(), dst)?);
    }

    Ok(copied)
}
