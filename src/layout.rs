//! Destination directory layout
//!
//! Names the sub-directories of a deployment and creates them before anything
//! is copied into them.

use std::path::{Path, PathBuf};

use crate::common::fs::ensure_dir;
use crate::config::DeployConfig;
use crate::error::Result;
use crate::platform::PlatformProfile;

pub const BIN_DIR: &str = "bin";
pub const LIB_DIR: &str = "lib";
pub const SCRIPTS_DIR: &str = "scripts";
pub const SHADERS_DIR: &str = "shaders";

/// Extension of the Maya module file
pub const MODULE_FILE_EXTENSION: &str = "mod";

/// Paths inside a deployment destination
#[derive(Debug, Clone)]
pub struct DeployLayout {
    root: PathBuf,
    plugins_dir: String,
}

impl DeployLayout {
    pub fn new(root: impl Into<PathBuf>, config: &DeployConfig) -> Self {
        Self {
            root: root.into(),
            plugins_dir: config.plugins_dir.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn lib(&self) -> PathBuf {
        self.root.join(LIB_DIR)
    }

    pub fn scripts(&self) -> PathBuf {
        self.root.join(SCRIPTS_DIR)
    }

    pub fn shaders(&self) -> PathBuf {
        self.root.join(SHADERS_DIR)
    }

    pub fn plugins(&self) -> PathBuf {
        self.root.join(&self.plugins_dir)
    }

    pub fn subdir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of the `<plugin>.mod` module file
    pub fn module_file(&self, plugin_name: &str) -> PathBuf {
        self.root
            .join(format!("{plugin_name}.{MODULE_FILE_EXTENSION}"))
    }

    /// Directories a deployment needs before copying starts
    ///
    /// `bin`, `scripts` and `shaders` are always present since the module file
    /// points at them. `lib` and the installation directories are only added
    /// when an appleseed installation is deployed, `lib` only on posix.
    pub fn required_dirs(
        &self,
        config: &DeployConfig,
        platform: PlatformProfile,
        with_appleseed: bool,
    ) -> Vec<PathBuf> {
        let mut dirs = vec![self.bin(), self.scripts(), self.shaders()];

        dirs.extend(config.project_dirs.iter().map(|d| self.subdir(d)));

        if with_appleseed {
            if platform.uses_library_path() {
                dirs.push(self.lib());
            }
            dirs.extend(config.appleseed_dirs.iter().map(|d| self.subdir(d)));
        }

        let mut unique = Vec::with_capacity(dirs.len());
        for dir in dirs {
            if !unique.contains(&dir) {
                unique.push(dir);
            }
        }
        unique
    }

    /// Create the root and the given directories
    ///
    /// Returns the directories that did not exist before.
    pub fn materialize(&self, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in std::iter::once(&self.root).chain(dirs) {
            if ensure_dir(dir)? {
                created.push(dir.clone());
            }
        }
        Ok(created)
    }
}
