//! Deploy configuration (deploy.yaml) data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wax::Glob;

use crate::error::{self, Result};

/// Shared libraries shipped with an appleseed installation, by logical name
///
/// Names are matched against the installed file names at deploy time, so
/// version suffixes (`-gcc48-mt-1_55.so.1.55.0`, `.so.12`, ...) are not listed.
const DEFAULT_LIBRARIES: &[&str] = &[
    "libboost_atomic",
    "libboost_chrono",
    "libboost_date_time",
    "libboost_filesystem",
    "libboost_python",
    "libboost_regex",
    "libboost_serialization",
    "libboost_system",
    "libboost_thread",
    "libboost_wave",
    "libz",
    "libxerces-c",
    "libHalf",
    "libIex",
    "libIlmThread",
    "libImath",
    "libIlmImf",
    "libjpeg",
    "libpng16",
    "libtiff",
    "libOpenImageIO",
    "libSeExpr",
    "libLLVM",
    "liboslcomp",
    "liboslexec",
    "liboslquery",
    "libappleseed",
    "libappleseed.shared",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Deploy configuration
///
/// Every field is optional in the YAML file; missing fields take the
/// appleseedMaya defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Plugin (and module file) name
    pub plugin_name: String,

    /// Directory of the built plugin, relative to the build directory
    pub plugin_build_dir: PathBuf,

    /// Destination directory of the plugin binary
    pub plugins_dir: String,

    /// Build cache key holding the Maya include directory
    pub include_dir_key: String,

    /// Maya header defining the API version, relative to the include directory
    pub maya_header: PathBuf,

    /// Macro holding the Maya API version
    pub maya_version_macro: String,

    /// Plugin version header, relative to the project root
    pub version_header: PathBuf,

    /// Macro prefix of the `_MAJOR`, `_MINOR` and `_PATCH` version defines
    pub version_prefix: String,

    /// Executables copied from the appleseed `bin` directory
    pub executables: Vec<String>,

    /// Shared libraries copied from the appleseed `lib` directory (logical names)
    pub libraries: Vec<String>,

    /// Python module directory in the appleseed installation
    pub python_dir: PathBuf,

    /// Shader directories in the appleseed installation, flattened into `shaders`
    pub shader_dirs: Vec<PathBuf>,

    /// Glob selecting compiled shaders
    pub shader_pattern: String,

    /// Directories merged from the appleseed installation
    pub appleseed_dirs: Vec<String>,

    /// Directories merged from the project root
    pub project_dirs: Vec<String>,

    /// License file copied from the project root
    pub license_file: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            plugin_name: "appleseedMaya".to_string(),
            plugin_build_dir: PathBuf::from("src/appleseedmaya"),
            plugins_dir: "plug-ins".to_string(),
            include_dir_key: "MAYA_INCLUDE_DIR".to_string(),
            maya_header: PathBuf::from("maya/MTypes.h"),
            maya_version_macro: "MAYA_API_VERSION".to_string(),
            version_header: PathBuf::from("src/appleseedmaya/version.h"),
            version_prefix: "APPLESEED_MAYA_VERSION".to_string(),
            executables: strings(&["appleseed.cli", "maketx"]),
            libraries: strings(DEFAULT_LIBRARIES),
            python_dir: PathBuf::from("lib/python2.7"),
            shader_dirs: vec![
                PathBuf::from("shaders/maya"),
                PathBuf::from("shaders/appleseed"),
            ],
            shader_pattern: "*.oso".to_string(),
            appleseed_dirs: strings(&["schemas", "settings"]),
            project_dirs: strings(&["icons", "presets", "resources", "scripts"]),
            license_file: "LICENSE.txt".to_string(),
        }
    }
}

impl DeployConfig {
    /// Parse deploy configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize deploy configuration to YAML string
    #[allow(dead_code)]
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            error::DeployError::ConfigParseFailed { reason, .. } => {
                error::config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, the built-in defaults otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.plugin_name.trim().is_empty() {
            return Err(error::config_invalid("plugin_name must not be empty"));
        }

        if let Err(e) = Glob::new(&self.shader_pattern) {
            return Err(error::invalid_glob(&self.shader_pattern, e.to_string()));
        }

        let named_dirs = self
            .appleseed_dirs
            .iter()
            .chain(&self.project_dirs)
            .chain(std::iter::once(&self.plugins_dir));
        for dir in named_dirs {
            if dir.is_empty() || Path::new(dir).is_absolute() {
                return Err(error::config_invalid(format!(
                    "'{dir}' must be a relative directory name"
                )));
            }
        }

        Ok(())
    }
}
