//! # clikit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the clikit CLI and the
//! [`CommandContext`] they share. Each command module defines a clap `Args` struct
//! and a `handle_*` function; `main.rs` parses, builds the context once, and routes.
//!
//! ## Commands
//!
//! - `archive`: Zip a file or directory tree.
//! - `unarchive`: Extract a zip into a directory.
//! - `list`: Show the entries of a zip.
//! - `download`: Fetch a remote file over HTTP(S).
//! - `fs`: Small filesystem operations (`mkdir`, `rm`, `cat`, `ln`, ...).
//!
//! Handlers do the work through `clikit::common` and report results through the
//! context's console logger. Errors are returned, never printed here.
//!
use clikit::common::ui::Logger;
use clikit::core::config::Config;

/// Creates a zip archive from a file or directory.
pub mod archive;
/// Downloads a remote file.
pub mod download;
/// Filesystem helper subcommands.
pub mod fs;
/// Lists archive entries.
pub mod list;
/// Extracts a zip archive.
pub mod unarchive;

/// State shared by every command handler for one invocation.
pub struct CommandContext {
    /// Merged user/project configuration with CLI overrides applied.
    pub config: Config,
    /// User-facing console output.
    pub logger: Logger,
}
