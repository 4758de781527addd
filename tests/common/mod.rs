//! Common test utilities for appleseed-maya-deploy integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Shared libraries shipped by the fixture appleseed installation
#[allow(dead_code)]
pub const APPLESEED_LIBRARIES: &[&str] = &[
    "libboost_atomic.so.1.61.0",
    "libboost_chrono.so.1.61.0",
    "libboost_date_time.so.1.61.0",
    "libboost_filesystem.so.1.61.0",
    "libboost_python-mt.so.1.61.0",
    "libboost_regex.so.1.61.0",
    "libboost_serialization.so.1.61.0",
    "libboost_system.so.1.61.0",
    "libboost_thread.so.1.61.0",
    "libboost_wave.so.1.61.0",
    "libz.so.1",
    "libxerces-c-3.1.so",
    "libHalf.so.12",
    "libIex-2_2.so.12",
    "libIlmThread-2_2.so.12",
    "libImath-2_2.so.12",
    "libIlmImf-2_2.so.22",
    "libjpeg.so.8",
    "libpng16.so.16",
    "libtiff.so.5",
    "libOpenImageIO.so.1.7",
    "libSeExpr.so",
    "libLLVM-3.4.so",
    "liboslcomp.so",
    "liboslexec.so",
    "liboslquery.so",
    "libappleseed.so",
    "libappleseed.shared.so",
];

/// A deployment workspace for integration tests
///
/// Lays out a project source tree, a CMake build directory with a Maya SDK
/// include directory, and an appleseed installation inside one temporary
/// directory.
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with project, build and appleseed trees
    pub fn with_fixtures() -> Self {
        let workspace = Self::new();
        workspace.create_project("0", "5", "2");
        workspace.create_build("20170000");
        workspace.create_appleseed();
        workspace
    }

    pub fn project(&self) -> PathBuf {
        self.path.join("appleseed-maya")
    }

    pub fn build(&self) -> PathBuf {
        self.path.join("build")
    }

    pub fn appleseed(&self) -> PathBuf {
        self.path.join("appleseed")
    }

    pub fn deploy(&self) -> PathBuf {
        self.path.join("deploy")
    }

    /// Create the plugin source tree
    pub fn create_project(&self, major: &str, minor: &str, patch: &str) {
        self.write_file(
            "appleseed-maya/src/appleseedmaya/version.h",
            &format!(
                "#ifndef APPLESEED_MAYA_VERSION_H\n\
                 #define APPLESEED_MAYA_VERSION_H\n\
                 #define APPLESEED_MAYA_VERSION_MAJOR {major}\n\
                 #define APPLESEED_MAYA_VERSION_MINOR {minor}\n\
                 #define APPLESEED_MAYA_VERSION_PATCH {patch}\n\
                 #endif\n"
            ),
        );
        self.write_file("appleseed-maya/LICENSE.txt", "The MIT License (MIT)\n");
        self.write_file("appleseed-maya/icons/appleseed.png", "png");
        self.write_file("appleseed-maya/presets/attrPresets/default.mel", "mel");
        self.write_file("appleseed-maya/resources/renderGlobals.txt", "res");
        self.write_file("appleseed-maya/scripts/appleseedMaya/__init__.py", "# init\n");
        self.write_file("appleseed-maya/scripts/appleseedMaya/menu.py", "# menu\n");
    }

    /// Create a configured build directory with a Maya SDK and built plugins
    pub fn create_build(&self, api_version: &str) {
        let include = self.path.join("maya2017/include");
        self.write_file(
            "build/CMakeCache.txt",
            &format!(
                "# This is the CMakeCache file.\n\
                 //Path to a file.\n\
                 MAYA_INCLUDE_DIR:PATH={}\n\
                 CMAKE_BUILD_TYPE:STRING=Release\n",
                include.display()
            ),
        );
        self.write_file(
            "maya2017/include/maya/MTypes.h",
            &format!("#ifndef _MTypes\n#define MAYA_API_VERSION {api_version}\n#endif\n"),
        );
        self.write_file("build/src/appleseedmaya/appleseedMaya.so", "posix plugin");
        self.write_file("build/src/appleseedmaya/appleseedMaya.mll", "windows plugin");
    }

    /// Create an appleseed installation usable for both platforms
    pub fn create_appleseed(&self) {
        for exe in ["appleseed.cli", "maketx", "appleseed.cli.exe", "maketx.exe"] {
            self.write_file(&format!("appleseed/bin/{exe}"), exe);
        }
        for lib in APPLESEED_LIBRARIES {
            self.write_file(&format!("appleseed/lib/{lib}"), lib);
        }
        self.write_file("appleseed/lib/libunrelated.so", "unrelated");
        self.write_file("appleseed/lib/python2.7/appleseed/__init__.py", "# appleseed\n");
        self.write_file("appleseed/shaders/maya/as_maya_file.oso", "oso");
        self.write_file("appleseed/shaders/maya/as_maya_file.osl", "osl");
        self.write_file("appleseed/shaders/appleseed/as_disney_material.oso", "oso");
        self.write_file("appleseed/schemas/project.xsd", "xsd");
        self.write_file("appleseed/settings/appleseed.cli.xml", "xml");
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the deploy directory
    pub fn read_deployed(&self, path: &str) -> String {
        std::fs::read_to_string(self.deploy().join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the deploy directory
    pub fn deployed(&self, path: &str) -> bool {
        self.deploy().join(path).exists()
    }

    /// Sorted entry names of a deployed directory
    pub fn deployed_names(&self, dir: &str) -> Vec<String> {
        list_names(&self.deploy().join(dir))
    }

    /// Get path to the deploy binary
    pub fn deploy_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_appleseed-maya-deploy"))
    }
}

#[allow(dead_code)]
fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
