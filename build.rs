// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

// Builder-API mirror of the derive definition in src/cli.rs, kept in sync
// by hand so the man page can be generated at build time.
fn build_cli() -> Command {
    Command::new("upmwrap")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Upmwrap Contributors")
        .about("Wrap a .unitypackage as a Unity UPM package")
        .arg(
            Arg::new("unitypackage")
                .required(true)
                .help("Path to the .unitypackage file to convert"),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .required(true)
                .help("Destination directory for the generated UPM package"),
        )
        .arg(
            Arg::new("package_name")
                .short('p')
                .long("package-name")
                .required(true)
                .help("UPM-style package name (e.g. com.mycompany.myasset)"),
        )
        .arg(
            Arg::new("display_name")
                .short('d')
                .long("display-name")
                .required(true)
                .help("Human-readable display name for the package"),
        )
        .arg(
            Arg::new("assembly_name")
                .short('a')
                .long("assembly-name")
                .required(true)
                .help("C# assembly name for the generated .asmdef file"),
        )
        .arg(
            Arg::new("package_version")
                .long("package-version")
                .default_value("1.0.0")
                .help("Version string for the UPM package"),
        )
        .arg(
            Arg::new("unity_version")
                .long("unity-version")
                .default_value("2021.3")
                .help("Minimum required Unity version"),
        )
        .arg(
            Arg::new("git_init")
                .short('g')
                .long("git-init")
                .action(ArgAction::SetTrue)
                .help("Initialise a git repository in the generated package and commit the result"),
        )
        .arg(
            Arg::new("lfs")
                .long("lfs")
                .action(ArgAction::SetTrue)
                .help("With --git-init, also copy .gitattributes and run 'git lfs install --local'"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Overwrite the output package directory if it already exists"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable detailed logging"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress most output"),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("upmwrap.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
