// src/convert.rs

//! Conversion orchestrator
//!
//! Sequences the pipeline: overwrite check, safe extraction into a scoped
//! scratch directory, asset tree reconstruction, descriptor generation,
//! and the optional git step. The scratch directory is a [`TempDir`]
//! dropped on every exit path, so a failed run never leaks extraction
//! state.

use crate::archive::extract_archive;
use crate::assets::rebuild_asset_tree;
use crate::descriptor::{write_assembly_descriptor, write_package_descriptor};
use crate::error::{Error, Result};
use crate::git::init_git_repo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for the optional version-control step.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitOptions {
    /// Also write `.gitattributes` and set up Git LFS.
    pub use_lfs: bool,
}

/// Parameters for a single conversion run
///
/// The caller (CLI layer) is expected to have validated the names; the
/// assembly name in particular must already be a well-formed dot-separated
/// identifier sequence.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
    pub package_name: String,
    pub display_name: String,
    pub assembly_name: String,
    pub version: String,
    pub unity_version: String,
    pub force: bool,
    pub git: Option<GitOptions>,
}

/// Convert a .unitypackage into a UPM package layout
///
/// Returns the generated package directory
/// (`<output_dir>/<package_name>`). Fails fast if the destination exists
/// and `force` is not set; with `force`, the existing directory is
/// removed first. Errors from extraction or reconstruction propagate and
/// nothing downstream runs.
pub fn convert(unitypackage: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let pkg_dir = options.output_dir.join(&options.package_name);

    if pkg_dir.exists() {
        if !options.force {
            return Err(Error::DestinationExists(pkg_dir));
        }
        info!(
            "Overwriting existing package directory: {}",
            pkg_dir.display()
        );
        fs::remove_dir_all(&pkg_dir)?;
    }

    let runtime_dir = pkg_dir.join("Runtime");
    fs::create_dir_all(&runtime_dir)?;

    info!("Extracting {}...", unitypackage.display());
    let dependencies = {
        let scratch = tempfile::tempdir()?;
        extract_archive(unitypackage, scratch.path())?;

        info!("Rebuilding asset tree...");
        rebuild_asset_tree(scratch.path(), &runtime_dir)?
    };

    info!("Writing package.json and asmdef...");
    write_package_descriptor(
        &pkg_dir,
        &options.package_name,
        &options.display_name,
        dependencies,
        &options.version,
        &options.unity_version,
    )?;
    write_assembly_descriptor(&runtime_dir, &options.assembly_name)?;

    if let Some(git) = options.git {
        init_git_repo(&pkg_dir, &options.display_name, git.use_lfs)?;
    }

    info!("Done. Package written to {}", pkg_dir.display());
    Ok(pkg_dir)
}
