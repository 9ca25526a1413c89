// src/lib.rs

//! upmwrap
//!
//! Converts Unity Asset Store `.unitypackage` archives into UPM-style
//! packages. The flat archive layout (one GUID-named directory per asset,
//! each with a `pathname` record and optional `asset` / `asset.meta`
//! payloads) is rebuilt into the original relative-path tree under
//! `Runtime/`, every asset is paired with its `.meta` sidecar, and the
//! `package.json` / `.asmdef` descriptors are generated. Dependencies
//! declared in an embedded `Packages/manifest.json` carry over into the
//! package descriptor.
//!
//! # Pipeline
//!
//! - `archive`: safe extraction (traversal entries are skipped)
//! - `assets`: flat scratch layout -> nested asset tree
//! - `manifest`: embedded dependency manifest extraction
//! - `descriptor`: `package.json` and `.asmdef` generation
//! - `convert`: orchestration with a scoped scratch directory
//! - `git`: optional repository initialization for the result

pub mod archive;
pub mod assets;
pub mod convert;
pub mod descriptor;
mod error;
pub mod filesystem;
pub mod git;
pub mod manifest;

pub use convert::{ConvertOptions, GitOptions, convert};
pub use error::{Error, Result};
pub use manifest::DependencyMap;
