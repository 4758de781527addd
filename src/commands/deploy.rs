//! Deploy command implementation
//!
//! Turns the command line into [`DeployOptions`], loads the deploy
//! configuration and runs the [`DeployOperation`].

use std::path::Path;

use crate::cli::Cli;
use crate::config::DeployConfig;
use crate::error::{self, Result};
use crate::operations::{DeployOperation, DeployOptions};
use crate::platform::PlatformProfile;
use crate::ui;

/// Run the deployment described by the command line
pub fn run(cli: &Cli) -> Result<()> {
    let options = options_from_cli(cli)?;
    let config = DeployConfig::resolve(cli.config.as_deref())?;

    let mut reporter = ui::reporter(cli.quiet, cli.verbose);
    DeployOperation::new(&options, &config, &mut *reporter).execute()?;

    Ok(())
}

fn options_from_cli(cli: &Cli) -> Result<DeployOptions> {
    let Some(destination) = cli.directory.clone() else {
        return Err(error::config_invalid("a destination directory is required"));
    };

    let platform = match cli.platform {
        Some(platform) => platform,
        None => PlatformProfile::detect()?,
    };

    let project_root = match &cli.project_root {
        Some(root) => canonical_dir(root)?,
        None => canonical_dir(&std::env::current_dir()?)?,
    };

    let appleseed_dir = cli
        .appleseed_dir
        .as_deref()
        .map(canonical_dir)
        .transpose()?;

    Ok(DeployOptions {
        destination,
        build_dir: cli.build_dir.clone(),
        appleseed_dir,
        project_root,
        platform,
    })
}

/// Canonicalize an existing directory without Windows verbatim prefixes
fn canonical_dir(path: &Path) -> Result<std::path::PathBuf> {
    match dunce::canonicalize(path) {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => Err(error::dir_not_found(path.display().to_string())),
    }
}
