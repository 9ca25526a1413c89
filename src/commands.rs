// src/commands.rs
//! Command handler for the upmwrap CLI

use crate::cli::Cli;
use anyhow::{Context, Result};
use upmwrap::{ConvertOptions, GitOptions, convert};

/// Run the conversion described by the parsed command line.
pub fn cmd_convert(cli: &Cli) -> Result<()> {
    let options = ConvertOptions {
        output_dir: cli.output_dir.clone(),
        package_name: cli.package_name.clone(),
        display_name: cli.display_name.clone(),
        assembly_name: cli.assembly_name.clone(),
        version: cli.package_version.clone(),
        unity_version: cli.unity_version.clone(),
        force: cli.force,
        git: cli.git_init.then_some(GitOptions { use_lfs: cli.lfs }),
    };

    let pkg_dir = convert(&cli.unitypackage, &options)
        .with_context(|| format!("Failed to convert {}", cli.unitypackage.display()))?;

    println!("Package written to: {}", pkg_dir.display());
    Ok(())
}
