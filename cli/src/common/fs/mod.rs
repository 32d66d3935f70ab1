//! # clikit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers used by clikit commands and by the
//! archive engine. Every helper is a thin wrapper around a `std::fs` call with an
//! existence check before it, reporting failures through `KitError`.
//!
//! ## Architecture
//!
//! - **`io`**: stat/create/delete/read/write helpers (`path_exists`, `create_directory`,
//!   `delete_directory_all`, `create_file`, `write_file`, `read_file`, `file_extension`,
//!   `ensure_dir_exists`, `home_directory`, ...).
//! - **`links`**: symbolic link creation (`create_symlink`).
//!
//! The most common helpers are re-exported here.
//!
//! ```rust
//! use clikit::common::fs;
//! use clikit::core::error::Result;
//!
//! # fn run_example() -> Result<()> {
//! # let tmp = tempfile::tempdir()?;
//! let dir = tmp.path().join("out");
//! fs::create_directory(&dir, 0o755)?;
//! fs::write_file(&dir.join("hello.txt"), 0o644, b"hi")?;
//! fs::delete_directory_all(&dir)?;
//! # Ok(())
//! # }
//! ```
//!

/// Stat-then-act file and directory helpers.
pub mod io;
/// Symbolic link creation.
pub mod links;

pub use io::{
    create_directory, create_file, delete_directory, delete_directory_all, delete_file,
    ensure_dir_exists, file_extension, home_directory, path_exists, path_not_exists, read_file,
    write_file,
};
pub use links::create_symlink;
