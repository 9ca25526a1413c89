// src/manifest.rs

//! Embedded package manager manifest handling
//!
//! Asset Store archives exported from a full project can carry the
//! project's `Packages/manifest.json` as a regular archive entry. Instead
//! of landing in the output tree, its `dependencies` map is folded into
//! the generated package descriptor so transitive package requirements
//! survive the conversion.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Reserved in-archive location of the package manager manifest.
pub const MANIFEST_PATH: &str = "Packages/manifest.json";

/// Accumulated package-name -> version-constraint mapping.
pub type DependencyMap = BTreeMap<String, String>;

/// Shape of the embedded manifest. Every field other than `dependencies`
/// is ignored.
#[derive(Debug, Deserialize)]
struct EmbeddedManifest {
    #[serde(default)]
    dependencies: DependencyMap,
}

/// Compare a decoded pathname record against the reserved manifest path,
/// ignoring case and separator style.
pub fn is_manifest_path(relative: &str) -> bool {
    relative
        .replace('\\', "/")
        .eq_ignore_ascii_case(MANIFEST_PATH)
}

/// Merge the `dependencies` of a manifest payload into `accumulator`
///
/// Later entries overwrite earlier keys. A payload that does not parse as
/// a manifest document leaves the accumulator untouched; a broken embedded
/// manifest is a diagnostic, never a conversion failure.
pub fn merge_manifest_dependencies(payload: &[u8], accumulator: &mut DependencyMap) {
    match serde_json::from_slice::<EmbeddedManifest>(payload) {
        Ok(manifest) => {
            accumulator.extend(manifest.dependencies);
            info!("Extracted {} dependencies from manifest", accumulator.len());
        }
        Err(err) => {
            warn!("Invalid JSON in manifest.json asset: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_manifest_path() {
        assert!(is_manifest_path("Packages/manifest.json"));
        assert!(is_manifest_path("packages/MANIFEST.JSON"));
        assert!(is_manifest_path("Packages\\manifest.json"));
        assert!(!is_manifest_path("Assets/manifest.json"));
        assert!(!is_manifest_path("Packages/manifest.json.meta"));
    }

    #[test]
    fn test_merge_dependencies() {
        let mut deps = DependencyMap::new();
        merge_manifest_dependencies(
            br#"{"dependencies": {"com.unity.x": "1.0.0"}, "scopedRegistries": []}"#,
            &mut deps,
        );
        assert_eq!(deps.get("com.unity.x").map(String::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_merge_overwrites_on_collision() {
        let mut deps = DependencyMap::new();
        deps.insert("com.unity.x".to_string(), "0.9.0".to_string());
        merge_manifest_dependencies(br#"{"dependencies": {"com.unity.x": "1.0.0"}}"#, &mut deps);
        assert_eq!(deps.get("com.unity.x").map(String::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_invalid_json_leaves_accumulator_unchanged() {
        let mut deps = DependencyMap::new();
        deps.insert("com.unity.x".to_string(), "1.0.0".to_string());

        merge_manifest_dependencies(b"not json at all", &mut deps);
        assert_eq!(deps.len(), 1);

        // Well-formed JSON with the wrong shape is a parse failure too.
        merge_manifest_dependencies(br#"{"dependencies": "oops"}"#, &mut deps);
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_missing_dependencies_field() {
        let mut deps = DependencyMap::new();
        merge_manifest_dependencies(br#"{"registry": "https://example.com"}"#, &mut deps);
        assert!(deps.is_empty());
    }
}
