//! # clikit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules. Command handlers (`commands::`) stay thin and
//! call into these; configuration and errors live in `core::`.
//!
//! - **`archive`**: Zip creation, extraction and listing, plus entry naming rules.
//! - **`fs`**: Small filesystem wrappers (stat, create, delete, read, write, links).
//! - **`network`**: HTTP(S) download of a remote file to disk.
//! - **`ui`**: The leveled console logger used for user-facing output.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clikit::common::{archive, fs};
//! use clikit::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! fs::ensure_dir_exists(Path::new("./dist"))?;
//! archive::archive(Path::new("./build"), Path::new("./dist/build.zip"))?;
//! archive::unarchive(Path::new("./dist/build.zip"), Path::new("./restored"))?;
//! # Ok(())
//! # }
//! ```
//!

/// Zip archive creation, extraction and listing.
pub mod archive;
/// Filesystem helpers (I/O wrappers, links).
pub mod fs;
/// HTTP(S) downloads.
pub mod network;
/// Console output.
pub mod ui;
