//! # clikit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file that
//! needs them declares `mod common;`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Returns a `Command` for the compiled `clikit` binary.
///
/// The user config is pointed at a path that never exists, so a developer's own
/// `config.toml` cannot change test behavior. `RUST_LOG` is cleared for the same
/// reason.
///
/// ## Panics
/// Panics if the `clikit` binary cannot be found via `Command::cargo_bin`.
pub fn clikit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("clikit").expect("Failed to find clikit binary for testing");
    cmd.env("CLIKIT_CONFIG", "/nonexistent/clikit-test/config.toml")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_tree_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture parent");
    }
    std::fs::write(&path, content).expect("write fixture file");
}
