//! appleseed-maya-deploy - deploy the appleseedMaya plugin
//!
//! Assembles a Maya module directory from an appleseedMaya build tree, the
//! project sources and, optionally, an appleseed installation.

use clap::Parser;
use miette::Diagnostic;

mod assets;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod layout;
mod manifest;
mod operations;
mod platform;
mod ui;
mod version;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell),
        None => commands::deploy::run(&cli),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
