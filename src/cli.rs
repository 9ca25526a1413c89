// src/cli.rs
//! CLI definitions for upmwrap
//!
//! This module contains the command-line interface definition using clap.
//! The actual command implementation is in the `commands` module.

use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

#[derive(Parser)]
#[command(name = "upmwrap")]
#[command(author = "Upmwrap Contributors")]
#[command(version)]
#[command(about = "Wrap a .unitypackage as a Unity UPM package", long_about = None)]
pub struct Cli {
    /// Path to the .unitypackage file to convert
    pub unitypackage: PathBuf,

    /// Destination directory for the generated UPM package
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// UPM-style package name (e.g. com.mycompany.myasset)
    #[arg(short, long)]
    pub package_name: String,

    /// Human-readable display name for the package
    #[arg(short, long)]
    pub display_name: String,

    /// C# assembly name for the generated .asmdef file
    #[arg(short, long, value_parser = validate_assembly_name)]
    pub assembly_name: String,

    /// Version string for the UPM package
    #[arg(long, default_value = "1.0.0")]
    pub package_version: String,

    /// Minimum required Unity version
    #[arg(long, default_value = "2021.3")]
    pub unity_version: String,

    /// Initialise a git repository in the generated package and commit the result
    #[arg(short = 'g', long)]
    pub git_init: bool,

    /// With --git-init, also copy .gitattributes and run `git lfs install --local`
    #[arg(long)]
    pub lfs: bool,

    /// Overwrite the output package directory if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable detailed logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress most output
    #[arg(short, long)]
    pub quiet: bool,
}

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("valid identifier regex"));

/// Validate a dot-separated C# assembly name
///
/// Each segment must be a valid identifier (`[A-Za-z_][A-Za-z0-9_]*`);
/// the `.asmdef` filename and the assembly it produces both derive from
/// this name.
pub fn validate_assembly_name(name: &str) -> Result<String, String> {
    for part in name.split('.') {
        if !IDENTIFIER_RE.is_match(part) {
            return Err(format!(
                "Invalid assembly name: '{}'. Each part must be a valid C# identifier (got invalid segment: '{}')",
                name, part
            ));
        }
    }
    Ok(name.to_string())
}
