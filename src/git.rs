// src/git.rs

//! Optional git repository initialization for the generated package
//!
//! Initializes a repository in the finished package directory, drops in
//! the embedded ignore/attribute templates, and commits the result. A
//! missing git (or git-lfs) executable skips the step with a warning
//! instead of failing the conversion.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

const GITIGNORE_TEMPLATE: &str = include_str!("../templates/gitignore");
const GITATTRIBUTES_TEMPLATE: &str = include_str!("../templates/gitattributes");

/// Run one git subcommand inside `pkg_dir`, failing on a non-zero exit.
fn run_git(pkg_dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .current_dir(pkg_dir)
        .status()?;

    if !status.success() {
        return Err(Error::VersionControl(format!(
            "git {} exited with {}",
            args.join(" "),
            status
        )));
    }
    Ok(())
}

/// Initialize a git repository in `pkg_dir` and commit the package
///
/// No-op when a repository is already present. When git itself is not
/// installed the step is skipped with a warning; a missing git-lfs only
/// skips the LFS setup. Failures of the actual init/add/commit commands
/// propagate.
pub fn init_git_repo(pkg_dir: &Path, display_name: &str, use_lfs: bool) -> Result<()> {
    if pkg_dir.join(".git").is_dir() {
        debug!("Git repo already present, skipping git init");
        return Ok(());
    }

    if which::which("git").is_err() {
        warn!("Git executable not found, skipping repository initialisation");
        return Ok(());
    }

    info!("Initialising git repository...");
    run_git(pkg_dir, &["init"])?;

    fs::write(pkg_dir.join(".gitignore"), GITIGNORE_TEMPLATE)?;

    if use_lfs {
        fs::write(pkg_dir.join(".gitattributes"), GITATTRIBUTES_TEMPLATE)?;
        if run_git(pkg_dir, &["lfs", "install", "--local"]).is_err() {
            warn!("Git-LFS is not available, continuing without it");
        }
    }

    run_git(pkg_dir, &["add", "-A"])?;
    run_git(
        pkg_dir,
        &[
            "commit",
            "-m",
            &format!("Add initial UPM package for {}", display_name),
        ],
    )?;

    Ok(())
}
