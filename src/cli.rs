//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::platform::PlatformProfile;

/// Deploy the appleseedMaya plugin
///
/// Copies the plugin, its scripts and resources, and optionally the appleseed
/// runtime into a directory that Maya can load as a module.
#[derive(Parser, Debug)]
#[command(
    name = "appleseed-maya-deploy",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Deploy the appleseedMaya plugin into a Maya module directory",
    long_about = "Deploys the appleseedMaya plugin into a Maya module directory: writes the \
                  appleseedMaya.mod module file, copies icons, presets, resources, scripts and \
                  the license, the built plugin binary, and optionally the appleseed binaries, \
                  libraries, python module and shaders.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  appleseed-maya-deploy -b build /opt/maya/modules/appleseedMaya\n    \
                  appleseed-maya-deploy -b build -a /opt/appleseed ~/maya/modules/appleseedMaya\n    \
                  appleseed-maya-deploy -b build --platform windows -c deploy.yaml out\n    \
                  appleseed-maya-deploy --completions bash"
)]
pub struct Cli {
    /// Destination directory
    #[arg(value_name = "DIRECTORY", required_unless_present = "completions")]
    pub directory: Option<PathBuf>,

    /// Set the path to the build directory
    #[arg(long, short = 'b', value_name = "BUILD_DIR")]
    pub build_dir: Option<PathBuf>,

    /// Set the path to the appleseed directory
    #[arg(long, short = 'a', value_name = "APPLESEED_DIR")]
    pub appleseed_dir: Option<PathBuf>,

    /// Root of the appleseedMaya source tree (defaults to current directory)
    #[arg(long, short = 'r', value_name = "PROJECT_ROOT", env = "APPLESEED_MAYA_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Deploy configuration file (YAML)
    #[arg(long, short = 'c', value_name = "FILE", env = "APPLESEED_MAYA_DEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Deploy for this platform instead of the host platform
    #[arg(long, value_enum, value_name = "PLATFORM")]
    pub platform: Option<PlatformProfile>,

    /// Print every copied file
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and warnings
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
