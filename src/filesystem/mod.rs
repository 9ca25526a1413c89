// src/filesystem/mod.rs

//! Filesystem helpers for upmwrap
//!
//! Every path written by the converter is derived from untrusted archive
//! content, so all destination paths go through the `path` module.

pub mod path;
