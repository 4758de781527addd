//! Deploy operation
//!
//! Runs the deployment as one linear sequence:
//! 1. Read the plugin version from the project header
//! 2. Create the destination and its sub-directories
//! 3. Read the Maya API version through the build cache (with a build directory)
//! 4. Write the module file
//! 5. Merge the project directories and copy the license
//! 6. Copy the plugin binary (with a build directory)
//! 7. Copy the appleseed runtime (with an appleseed directory)
//!
//! Nothing is rolled back: a failure leaves whatever was copied so far.

use std::path::{Path, PathBuf};

use crate::assets::{self, AppleseedInstall, ResolvedLibrary};
use crate::common::fs::merge_tree;
use crate::config::DeployConfig;
use crate::error::Result;
use crate::layout::DeployLayout;
use crate::manifest::ModuleManifest;
use crate::platform::PlatformProfile;
use crate::ui::Reporter;
use crate::version::{self, VersionTuple};

/// Inputs of a deployment
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Destination root
    pub destination: PathBuf,
    /// CMake build directory of the plugin
    pub build_dir: Option<PathBuf>,
    /// Root of an appleseed installation
    pub appleseed_dir: Option<PathBuf>,
    /// Root of the plugin source tree
    pub project_root: PathBuf,
    pub platform: PlatformProfile,
}

/// What a deployment did
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct DeploySummary {
    pub version: VersionTuple,
    pub maya_version: Option<String>,
    pub module_file: PathBuf,
    pub plugin: Option<PathBuf>,
    pub created_dirs: Vec<PathBuf>,
    pub libraries: Vec<ResolvedLibrary>,
    pub files_copied: usize,
    pub trees_merged: usize,
}

/// Main orchestrator for the deploy operation
pub struct DeployOperation<'a> {
    options: &'a DeployOptions,
    config: &'a DeployConfig,
    reporter: &'a mut dyn Reporter,
    layout: DeployLayout,
}

impl<'a> DeployOperation<'a> {
    pub fn new(
        options: &'a DeployOptions,
        config: &'a DeployConfig,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        let layout = DeployLayout::new(&options.destination, config);
        Self {
            options,
            config,
            reporter,
            layout,
        }
    }

    /// Run the deployment
    pub fn execute(&mut self) -> Result<DeploySummary> {
        self.reporter.start(self.total_steps());
        match self.run() {
            Ok(summary) => {
                self.reporter.finish(&format!(
                    "Deployed {} {}: {} files copied, {} directories merged, {} directories created",
                    self.config.plugin_name,
                    summary.version,
                    summary.files_copied,
                    summary.trees_merged,
                    summary.created_dirs.len()
                ));
                Ok(summary)
            }
            Err(e) => {
                self.reporter.abandon();
                Err(e)
            }
        }
    }

    /// Number of `step` calls `run` will make
    fn total_steps(&self) -> u64 {
        let mut steps = 4 + self.config.project_dirs.len();
        if self.options.build_dir.is_some() {
            steps += 1;
        }
        if self.options.appleseed_dir.is_some() {
            steps += 1;
        }
        steps as u64
    }

    fn run(&mut self) -> Result<DeploySummary> {
        let options = self.options;
        let config = self.config;

        let header = options.project_root.join(&config.version_header);
        let version = version::resolve_project_version(&header, &config.version_prefix)?;
        self.reporter.step(&format!(
            "Deploying {} {} to {}...",
            config.plugin_name,
            version,
            options.destination.display()
        ));

        self.reporter.step("Creating deploy directory...");
        let dirs = self.layout.required_dirs(
            config,
            options.platform,
            options.appleseed_dir.is_some(),
        );
        let created_dirs = self.layout.materialize(&dirs)?;
        for dir in &created_dirs {
            self.report_path(dir);
        }

        let mut summary = DeploySummary {
            version,
            maya_version: None,
            module_file: self.layout.module_file(&config.plugin_name),
            plugin: None,
            created_dirs,
            libraries: Vec::new(),
            files_copied: 0,
            trees_merged: 0,
        };

        if let Some(build_dir) = &options.build_dir {
            let maya_version = version::resolve_maya_version(
                build_dir,
                &config.include_dir_key,
                &config.maya_header,
                &config.maya_version_macro,
            )?;
            self.reporter.info(&format!("Maya version = {maya_version}"));
            summary.maya_version = Some(maya_version);
        } else {
            self.reporter.warn(
                "No build directory given, skipping Maya version detection and plugin copy",
            );
        }

        self.reporter.step("Copying module file...");
        ModuleManifest::new(&config.plugin_name, options.platform).write(&summary.module_file)?;

        self.copy_project(&mut summary)?;

        if let Some(build_dir) = &options.build_dir {
            self.reporter.step("Copying plugins...");
            let plugin = assets::copy_plugin(build_dir, config, options.platform, &self.layout)?;
            self.report_copied(std::slice::from_ref(&plugin), &mut summary);
            summary.plugin = Some(plugin);
        }

        if let Some(appleseed_dir) = &options.appleseed_dir {
            self.reporter.step("Copying appleseed binaries and libraries...");
            self.copy_appleseed(&AppleseedInstall::new(appleseed_dir), &mut summary)?;
        }

        Ok(summary)
    }

    fn copy_project(&mut self, summary: &mut DeploySummary) -> Result<()> {
        let options = self.options;
        let config = self.config;
        let root = &options.project_root;

        for dir in &config.project_dirs {
            self.reporter.step(&format!("Copying {dir}..."));
            let copied = merge_tree(&root.join(dir), &self.layout.subdir(dir))?;
            summary.trees_merged += 1;
            self.report_copied(&copied, summary);
        }

        self.reporter.step("Copying license...");
        let license = assets::copy_license(root, config, &self.layout)?;
        self.report_copied(std::slice::from_ref(&license), summary);

        Ok(())
    }

    fn copy_appleseed(
        &mut self,
        install: &AppleseedInstall,
        summary: &mut DeploySummary,
    ) -> Result<()> {
        let config = self.config;
        let platform = self.options.platform;

        let executables = install.copy_executables(config, platform, &self.layout)?;
        self.report_copied(&executables, summary);

        if platform.uses_library_path() {
            let (libraries, copied) = install.copy_libraries(config, &self.layout)?;
            self.report_copied(&copied, summary);
            summary.libraries = libraries;
        }

        let python = merge_tree(&install.subdir(&config.python_dir), &self.layout.scripts())?;
        summary.trees_merged += 1;
        self.report_copied(&python, summary);

        for dir in install.missing_shader_dirs(config) {
            self.reporter.warn(&format!(
                "No shader directory {}, skipping",
                install.subdir(dir).display()
            ));
        }
        let shaders = install.copy_shaders(config, &self.layout)?;
        self.report_copied(&shaders, summary);

        for dir in &config.appleseed_dirs {
            let copied = merge_tree(&install.subdir(dir), &self.layout.subdir(dir))?;
            summary.trees_merged += 1;
            self.report_copied(&copied, summary);
        }

        Ok(())
    }

    fn report_copied(&mut self, files: &[PathBuf], summary: &mut DeploySummary) {
        for file in files {
            self.report_path(file);
        }
        summary.files_copied += files.len();
    }

    fn report_path(&mut self, path: &Path) {
        let shown = path.strip_prefix(self.layout.root()).unwrap_or(path);
        self.reporter.detail(&shown.display().to_string());
    }
}
