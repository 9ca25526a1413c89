// src/assets.rs

//! Asset tree reconstruction
//!
//! An extracted .unitypackage is flat: one directory per asset, named by
//! GUID, holding a `pathname` record plus optional `asset` and
//! `asset.meta` payloads. This module folds that layout back into the
//! real relative-path tree under the Runtime root, pairing every file
//! asset with its meta sidecar and turning metadata-only entries into
//! directories.

use crate::error::Result;
use crate::filesystem::path::safe_join;
use crate::manifest::{self, DependencyMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Decode a pathname record
///
/// Takes the bytes up to the first newline or NUL (whichever comes
/// first) and decodes them as UTF-8, replacing invalid sequences.
pub fn decode_pathname(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .position(|&b| b == b'\n' || b == b'\0')
        .unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Destination of a meta sidecar: `.meta` appended to the full filename
/// (`Foo.cs` -> `Foo.cs.meta`, `Textures` -> `Textures.meta`).
fn meta_destination(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!("{}.meta", name))
}

/// Rebuild the asset tree under `runtime_dir` from the flat scratch layout
///
/// Walks every immediate child directory of `scratch` and relocates its
/// payloads to the decoded relative path. An entry whose record names the
/// reserved `Packages/manifest.json` location is routed to the dependency
/// extractor instead of being copied; the accumulated dependency map is
/// the return value, so no state outlives the call.
///
/// Per-entry problems (missing records, traversal attempts in a record,
/// absent metadata) degrade to logged diagnostics; only real I/O failures
/// abort the walk.
pub fn rebuild_asset_tree(scratch: &Path, runtime_dir: &Path) -> Result<DependencyMap> {
    let mut dependencies = DependencyMap::new();

    for item in fs::read_dir(scratch)? {
        let entry_dir = item?.path();
        let pathname_file = entry_dir.join("pathname");
        if !pathname_file.is_file() {
            debug!("Skipping junk item: {}", entry_dir.display());
            continue;
        }

        let relative = decode_pathname(&fs::read(&pathname_file)?);

        let asset_file = entry_dir.join("asset");
        let meta_file = entry_dir.join("asset.meta");

        // Routing check comes before any copy logic: the embedded package
        // manager manifest feeds the dependency map, never the tree.
        if manifest::is_manifest_path(&relative) {
            if asset_file.is_file() {
                manifest::merge_manifest_dependencies(&fs::read(&asset_file)?, &mut dependencies);
            }
            continue;
        }

        let dest_path = match safe_join(runtime_dir, &relative) {
            Ok(path) => path,
            Err(err) => {
                warn!("Skipping suspicious entry {}: {}", entry_dir.display(), err);
                continue;
            }
        };
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if asset_file.is_file() {
            // Regular asset
            debug!(
                "Copying asset: {} -> {}",
                asset_file.display(),
                dest_path.display()
            );
            fs::copy(&asset_file, &dest_path)?;
        } else if meta_file.is_file() {
            // Folder asset: Unity records folders as metadata-only entries
            debug!("Creating folder: {}", dest_path.display());
            fs::create_dir_all(&dest_path)?;
        } else {
            debug!("Skipping empty entry: {}", entry_dir.display());
            continue;
        }

        if !meta_file.is_file() {
            warn!("No .meta for {}", asset_file.display());
            continue;
        }
        fs::copy(&meta_file, meta_destination(&dest_path))?;
    }

    Ok(dependencies)
}
