use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // The demo is a GUI app, no console window on Windows
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        println!("cargo:rustc-link-arg-bins=/SUBSYSTEM:WINDOWS");
        println!("cargo:rustc-link-arg-bins=/ENTRY:mainCRTStartup");
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("version_info.rs");

    fs::write(
        &dest_path,
        format!(
            "pub const VERSION: &str = \"{}\";\npub const GIT_HASH: &str = \"{}\";\n",
            env!("CARGO_PKG_VERSION"),
            git_hash()
        ),
    )
    .expect("failed to write version_info.rs");
}
