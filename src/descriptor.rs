// src/descriptor.rs

//! Output descriptor documents
//!
//! Writes the two generated documents of a UPM package: the package
//! descriptor (`package.json`) and the assembly definition
//! (`<name>.asmdef`). Pure serialization; the CLI layer guarantees the
//! names are well-formed before they reach this module.

use crate::error::Result;
use crate::manifest::DependencyMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Default package version when the caller supplies none.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Default minimum Unity version.
pub const DEFAULT_UNITY_VERSION: &str = "2021.3";

/// UPM package descriptor (`package.json`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub unity: String,
    pub description: String,
    pub author: Author,
    #[serde(skip_serializing_if = "DependencyMap::is_empty")]
    pub dependencies: DependencyMap,
}

/// Fixed author block for wrapped packages
#[derive(Debug, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Assembly definition descriptor (`.asmdef`)
///
/// The generated assembly references nothing, is auto-referenced, and
/// keeps engine references enabled.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyDescriptor {
    pub name: String,
    pub references: Vec<String>,
    pub auto_referenced: bool,
    pub no_engine_references: bool,
}

/// Write `package.json` into the package directory
///
/// The dependency block is only emitted when non-empty.
pub fn write_package_descriptor(
    pkg_dir: &Path,
    name: &str,
    display_name: &str,
    dependencies: DependencyMap,
    version: &str,
    unity_version: &str,
) -> Result<()> {
    let descriptor = PackageDescriptor {
        name: name.to_string(),
        display_name: display_name.to_string(),
        version: version.to_string(),
        unity: unity_version.to_string(),
        description: format!("Wrapped version of {}", display_name),
        author: Author {
            name: "AutoWrapped".to_string(),
            email: "noreply@example.com".to_string(),
        },
        dependencies,
    };

    let json = serde_json::to_string_pretty(&descriptor)?;
    fs::write(pkg_dir.join("package.json"), json)?;
    Ok(())
}

/// Write `<name>.asmdef` into the Runtime directory
pub fn write_assembly_descriptor(runtime_dir: &Path, name: &str) -> Result<()> {
    let descriptor = AssemblyDescriptor {
        name: name.to_string(),
        references: Vec::new(),
        auto_referenced: true,
        no_engine_references: false,
    };

    let json = serde_json::to_string_pretty(&descriptor)?;
    fs::write(runtime_dir.join(format!("{}.asmdef", name)), json)?;
    Ok(())
}
