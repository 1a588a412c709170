//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/archway to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_archway_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "archway", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build archway");

    assert!(status.success(), "Failed to build archway binary");

    workspace.join("target/debug/archway")
}

/// Run the archway binary with the given arguments
pub fn run_archway(args: &[&str]) -> Output {
    let binary = get_archway_binary();

    Command::new(&binary)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute archway binary")
}

/// Run the archway binary with the given stdin content
pub fn run_archway_with_stdin(args: &[&str], stdin: &str) -> Output {
    use std::io::Write;

    let binary = get_archway_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn archway binary");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for archway binary")
}
