//! Asset copying for a deployment
//!
//! This module handles:
//! - The built plugin binary (from the build directory)
//! - Executables, shared libraries, the python module, shaders and data
//!   directories (from an appleseed installation)
//! - Directories and the license file (from the project root)

pub mod libraries;

use std::path::{Path, PathBuf};

use crate::common::fs::{copy_file_into, copy_matching, ensure_dir};
use crate::config::DeployConfig;
use crate::error::Result;
use crate::layout::DeployLayout;
use crate::platform::PlatformProfile;

pub use libraries::ResolvedLibrary;

/// Location of the built plugin binary inside a build directory
pub fn plugin_binary_path(
    build_dir: &Path,
    config: &DeployConfig,
    platform: PlatformProfile,
) -> PathBuf {
    build_dir.join(&config.plugin_build_dir).join(format!(
        "{}{}",
        config.plugin_name,
        platform.plugin_extension()
    ))
}

/// Copy the plugin binary into the layout's plugin directory
pub fn copy_plugin(
    build_dir: &Path,
    config: &DeployConfig,
    platform: PlatformProfile,
    layout: &DeployLayout,
) -> Result<PathBuf> {
    let source = plugin_binary_path(build_dir, config, platform);
    ensure_dir(&layout.plugins())?;
    copy_file_into(&source, &layout.plugins())
}

/// Copy the project license into the destination root
pub fn copy_license(
    project_root: &Path,
    config: &DeployConfig,
    layout: &DeployLayout,
) -> Result<PathBuf> {
    copy_file_into(&project_root.join(&config.license_file), layout.root())
}

/// An appleseed installation to deploy from
#[derive(Debug, Clone)]
pub struct AppleseedInstall {
    root: PathBuf,
}

impl AppleseedInstall {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn bin(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn lib(&self) -> PathBuf {
        self.root.join("lib")
    }

    pub fn subdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Copy the configured executables into the layout's `bin`
    pub fn copy_executables(
        &self,
        config: &DeployConfig,
        platform: PlatformProfile,
        layout: &DeployLayout,
    ) -> Result<Vec<PathBuf>> {
        let bin = self.bin();
        config
            .executables
            .iter()
            .map(|name| copy_file_into(&bin.join(platform.executable_name(name)), &layout.bin()))
            .collect()
    }

    /// Resolve and copy the configured shared libraries into the layout's `lib`
    pub fn copy_libraries(
        &self,
        config: &DeployConfig,
        layout: &DeployLayout,
    ) -> Result<(Vec<ResolvedLibrary>, Vec<PathBuf>)> {
        libraries::copy_libraries(&self.lib(), &config.libraries, &layout.lib())
    }

    /// Configured shader directories absent from this installation
    pub fn missing_shader_dirs<'c>(&self, config: &'c DeployConfig) -> Vec<&'c Path> {
        config
            .shader_dirs
            .iter()
            .map(PathBuf::as_path)
            .filter(|dir| !self.subdir(dir).is_dir())
            .collect()
    }

    /// Flatten the compiled shaders of every shader directory into the layout's `shaders`
    ///
    /// Shader directories missing from the installation contribute nothing.
    pub fn copy_shaders(
        &self,
        config: &DeployConfig,
        layout: &DeployLayout,
    ) -> Result<Vec<PathBuf>> {
        let mut copied = Vec::new();
        for dir in &config.shader_dirs {
            copied.extend(copy_matching(
                &self.subdir(dir),
                &config.shader_pattern,
                &layout.shaders(),
            )?);
        }
        Ok(copied)
    }
}
