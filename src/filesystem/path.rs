// src/filesystem/path.rs

//! Path handling for untrusted archive content
//!
//! Tar entry names and pathname records both come straight out of the
//! source archive. A crafted path like `../../etc/passwd` must never be
//! able to place a file outside the directory it is being written under,
//! so entry names are screened with [`has_traversal`] and decoded
//! pathname records are joined with [`safe_join`].

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Check whether a path contains a parent-directory (`..`) component.
///
/// Used by the extractor to skip suspicious archive entries outright.
pub fn has_traversal(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::ParentDir))
}

/// Join an untrusted relative path under `root`.
///
/// - `..` components are rejected with [`Error::PathTraversal`]
/// - `.` components, root markers and Windows prefixes are skipped
/// - a path that is empty after normalization is rejected
///
/// The result is always a descendant of `root`.
///
/// # Examples
///
/// ```
/// use upmwrap::filesystem::path::safe_join;
/// use std::path::{Path, PathBuf};
///
/// let root = Path::new("/tmp/runtime");
///
/// assert_eq!(
///     safe_join(root, "Assets/Scripts/Foo.cs").unwrap(),
///     PathBuf::from("/tmp/runtime/Assets/Scripts/Foo.cs")
/// );
///
/// assert!(safe_join(root, "../escape.txt").is_err());
/// ```
pub fn safe_join(root: &Path, relative: &str) -> Result<PathBuf> {
    let mut joined = root.to_path_buf();
    let mut pushed = false;

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                joined.push(part);
                pushed = true;
            }
            Component::CurDir => {
                // "." - skip it
            }
            Component::ParentDir => {
                return Err(Error::PathTraversal(relative.to_string()));
            }
            Component::Prefix(_) | Component::RootDir => {
                // Skip Windows prefixes and root markers
            }
        }
    }

    if !pushed {
        return Err(Error::InvalidPath(format!(
            "Empty path after normalization: {}",
            relative
        )));
    }

    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_traversal() {
        assert!(has_traversal(Path::new("../escape.txt")));
        assert!(has_traversal(Path::new("foo/../../bar")));
        assert!(!has_traversal(Path::new("Assets/Scripts/Foo.cs")));
        assert!(!has_traversal(Path::new("./guid/pathname")));
    }

    #[test]
    fn test_safe_join_normal() {
        let root = Path::new("/out/Runtime");
        assert_eq!(
            safe_join(root, "Assets/Foo.txt").unwrap(),
            PathBuf::from("/out/Runtime/Assets/Foo.txt")
        );
    }

    #[test]
    fn test_safe_join_strips_leading_markers() {
        let root = Path::new("/out/Runtime");
        assert_eq!(
            safe_join(root, "/Assets/Foo.txt").unwrap(),
            PathBuf::from("/out/Runtime/Assets/Foo.txt")
        );
        assert_eq!(
            safe_join(root, "./Assets/Foo.txt").unwrap(),
            PathBuf::from("/out/Runtime/Assets/Foo.txt")
        );
    }

    #[test]
    fn test_safe_join_rejects_traversal() {
        let root = Path::new("/out/Runtime");
        assert!(matches!(
            safe_join(root, "../escape.txt"),
            Err(Error::PathTraversal(_))
        ));
        assert!(matches!(
            safe_join(root, "Assets/../../escape.txt"),
            Err(Error::PathTraversal(_))
        ));
    }

    #[test]
    fn test_safe_join_rejects_empty() {
        let root = Path::new("/out/Runtime");
        assert!(matches!(safe_join(root, ""), Err(Error::InvalidPath(_))));
        assert!(matches!(safe_join(root, "./."), Err(Error::InvalidPath(_))));
    }
}
