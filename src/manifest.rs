//! Maya module file (`<plugin>.mod`) generation
//!
//! The module file tells Maya where the plugin lives and which environment
//! variables to extend when it is loaded. All paths are relative to the
//! module root, so the deployment directory can be moved as a whole.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{self, Result};
use crate::layout::{BIN_DIR, LIB_DIR, SCRIPTS_DIR, SHADERS_DIR};
use crate::platform::PlatformProfile;

/// Contents of a module file
#[derive(Debug, Clone)]
pub struct ModuleManifest {
    plugin_name: String,
    platform: PlatformProfile,
}

impl ModuleManifest {
    pub fn new(plugin_name: impl Into<String>, platform: PlatformProfile) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            platform,
        }
    }

    /// Render the module file text
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "+ {} any .", self.plugin_name);

        let _ = writeln!(out, "PATH +:= {BIN_DIR}");
        if self.platform.uses_library_path() {
            let _ = writeln!(out, "LD_LIBRARY_PATH +:= {LIB_DIR}");
        }
        out.push('\n');

        let _ = writeln!(out, "PYTHONPATH +:= {SCRIPTS_DIR}");
        out.push('\n');

        let _ = writeln!(out, "APPLESEED_SEARCHPATH := {SHADERS_DIR}");
        out
    }

    /// Write the module file, replacing any existing one
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())
            .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))
    }
}
