//! Shared library resolution by logical name
//!
//! A logical name such as `libIex` or `libboost_thread` is matched against
//! the files of the installation's `lib` directory, so the deployed set
//! follows whatever versions the installation ships.

use std::path::{Path, PathBuf};

use crate::common::fs::copy_file_into;
use crate::error::{self, Result};

/// Files found for one logical library name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLibrary {
    pub name: String,
    pub files: Vec<PathBuf>,
}

/// Check whether `file_name` is a build of the library `name`
///
/// Matches the exact name, or the name followed by a suffix that starts
/// with `.so` or `-` and contains `.so`:
/// - `libz` matches `libz.so.1`
/// - `libIex` matches `libIex-2_2.so.12`
/// - `libappleseed` does not match `libappleseed.shared.so`
pub fn matches_library(name: &str, file_name: &str) -> bool {
    let Some(rest) = file_name.strip_prefix(name) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    (rest.starts_with(".so") || rest.starts_with('-')) && rest.contains(".so")
}

/// Resolve every logical name against the files in `lib_dir`
///
/// Fails on the first name without any matching file, before anything is copied.
pub fn resolve(lib_dir: &Path, names: &[String]) -> Result<Vec<ResolvedLibrary>> {
    if !lib_dir.is_dir() {
        return Err(error::dir_not_found(lib_dir.display().to_string()));
    }

    let available = list_files(lib_dir)?;

    names
        .iter()
        .map(|name| {
            let files: Vec<PathBuf> = available
                .iter()
                .filter(|(file_name, _)| matches_library(name, file_name))
                .map(|(_, path)| path.clone())
                .collect();
            if files.is_empty() {
                Err(error::library_not_found(
                    name,
                    lib_dir.display().to_string(),
                ))
            } else {
                Ok(ResolvedLibrary {
                    name: name.clone(),
                    files,
                })
            }
        })
        .collect()
}

/// Files directly inside `dir` as `(file name, path)`, sorted by name
///
/// Entries with non UTF-8 names are skipped; any listing error is returned.
fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let read_failed =
        |e: std::io::Error| error::file_read_failed(dir.display().to_string(), e.to_string());

    let entries = std::fs::read_dir(dir)
        .map_err(read_failed)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_failed)?;

    let mut files: Vec<(String, PathBuf)> = entries
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?.to_string();
            Some((file_name, path))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Resolve `names` in `lib_dir` and copy every matching file into `dest`
pub fn copy_libraries(
    lib_dir: &Path,
    names: &[String],
    dest: &Path,
) -> Result<(Vec<ResolvedLibrary>, Vec<PathBuf>)> {
    let resolved = resolve(lib_dir, names)?;

    // Symlinked versions (libz.so -> libz.so.1) are copied as regular files,
    // one full copy per link name.
    let mut copied = Vec::new();
    for library in &resolved {
        for file in &library.files {
            let target = dest.join(file.file_name().unwrap_or_default());
            if copied.contains(&target) {
                continue;
            }
            copied.push(copy_file_into(file, dest)?);
        }
    }

    Ok((resolved, copied))
}
