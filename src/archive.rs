// src/archive.rs

//! Safe extraction of .unitypackage archives
//!
//! A .unitypackage is a tar archive (almost always gzip-compressed) with
//! one top-level directory per asset. The extractor sniffs the
//! compression from magic bytes and refuses to write any entry whose
//! recorded name contains a `..` component.

use crate::error::{Error, Result};
use crate::filesystem::path::has_traversal;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tar::Archive;
use tracing::{debug, warn};

/// Gzip magic: 0x1F 0x8B
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a .unitypackage archive for reading
///
/// Detects gzip compression from magic bytes and falls back to plain tar.
/// Any failure to open or probe the file is fatal and propagates to the
/// caller.
pub fn open_archive(path: &Path) -> Result<Archive<Box<dyn Read>>> {
    let open_err = |source| Error::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(open_err)?;

    let mut magic = [0u8; 2];
    let read = file.read(&mut magic).map_err(open_err)?;
    file.rewind().map_err(open_err)?;

    let reader: Box<dyn Read> = if read == GZIP_MAGIC.len() && magic == GZIP_MAGIC {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    Ok(Archive::new(reader))
}

/// Extract `src` into `dest`, skipping suspicious entries
///
/// Entries with a `..` component anywhere in their recorded name are
/// reported and never written; this is the defense against path-traversal
/// attacks via crafted entry names. `unpack_in` re-checks the final write
/// path, so anything that slips past the component screen is still
/// refused.
pub fn extract_archive(src: &Path, dest: &Path) -> Result<()> {
    let mut archive = open_archive(src)?;

    let entries = archive.entries().map_err(|source| Error::ArchiveOpen {
        path: src.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let mut entry = entry?;
        let entry_path = entry.path()?.into_owned();

        if has_traversal(&entry_path) {
            warn!("Skipping suspicious entry {}", entry_path.display());
            continue;
        }

        if !entry.unpack_in(dest)? {
            warn!("Skipping suspicious entry {}", entry_path.display());
            continue;
        }
        debug!("Extracted {}", entry_path.display());
    }

    Ok(())
}
