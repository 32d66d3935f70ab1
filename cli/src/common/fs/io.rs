//! # clikit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the stat-then-act filesystem helpers used by clikit
//! commands and by the archive engine. Each helper checks for the presence (or
//! absence) of its path first and reports a precise `KitError` category before
//! touching anything:
//!
//! - create-only operations (`create_directory`, `create_file`, `write_file`) fail
//!   with `AlreadyExists` instead of overwriting,
//! - delete and read operations (`delete_directory`, `delete_directory_all`,
//!   `delete_file`, `read_file`) fail with `NotFound` on a missing path,
//! - any other failure surfaces as `KitError::Io` carrying the offending path.
//!
//! Permission modes are applied on unix and ignored elsewhere.
//!
//! ## Usage
//!
//! ```rust
//! use clikit::common::fs::io;
//! use clikit::core::error::Result;
//!
//! # fn run_example() -> Result<()> {
//! # let tmp = tempfile::tempdir()?;
//! let notes = tmp.path().join("notes.txt");
//!
//! io::write_file(&notes, 0o644, b"remember the milk")?;
//! assert_eq!(io::read_file(&notes)?, b"remember the milk");
//! assert_eq!(io::file_extension(&notes)?, "txt");
//!
//! io::delete_file(&notes)?;
//! assert!(io::path_not_exists(&notes)?);
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{KitError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Returns the lowercase extension of `path`: the text after its last `.`.
///
/// # Errors
///
/// `KitError::InvalidArgument` if the path contains no `.` at all.
pub fn file_extension(path: &Path) -> Result<String> {
    let text = path.to_string_lossy();
    match text.rsplit_once('.') {
        Some((_, extension)) => Ok(extension.to_lowercase()),
        None => Err(KitError::InvalidArgument(format!(
            "Failed to find a file extension in '{}'. Filepath must be in format of <filename>.<ext>",
            text
        ))
        .into()),
    }
}

/// Returns `true` if something exists at `path`.
///
/// A missing path is `Ok(false)`; any other stat failure (e.g. permission denied
/// on a parent directory) is returned as `KitError::Io`.
pub fn path_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(KitError::io(path, e).into()),
    }
}

/// Returns `true` if nothing exists at `path`. The inverse of [`path_exists`].
pub fn path_not_exists(path: &Path) -> Result<bool> {
    path_exists(path).map(|exists| !exists)
}

/// Creates a single directory at `path` with the given permission `mode`.
///
/// Parent directories are not created; see [`ensure_dir_exists`] for `mkdir -p`.
///
/// # Errors
///
/// - `KitError::AlreadyExists` if anything already exists at `path`.
/// - `KitError::Io` if the directory cannot be created.
pub fn create_directory(path: &Path, mode: u32) -> Result<()> {
    if path_exists(path)? {
        return Err(KitError::AlreadyExists(format!(
            "Directory '{}' already exists",
            path.display()
        ))
        .into());
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path).map_err(|e| KitError::io(path, e))?;
    info!("Created directory: {:?}", path);
    Ok(())
}

/// Deletes the empty directory at `path`.
///
/// # Errors
///
/// - `KitError::NotFound` if `path` does not exist.
/// - `KitError::Io` if it is not an empty directory or cannot be removed.
pub fn delete_directory(path: &Path) -> Result<()> {
    require_exists(path, "Directory")?;
    fs::remove_dir(path).map_err(|e| KitError::io(path, e))?;
    info!("Deleted directory: {:?}", path);
    Ok(())
}

/// Deletes the directory at `path` together with everything below it.
///
/// # Errors
///
/// - `KitError::NotFound` if `path` does not exist.
/// - `KitError::Io` if any part of the tree cannot be removed.
pub fn delete_directory_all(path: &Path) -> Result<()> {
    require_exists(path, "Directory")?;
    fs::remove_dir_all(path).map_err(|e| KitError::io(path, e))?;
    info!("Deleted directory tree: {:?}", path);
    Ok(())
}

/// Creates an empty file at `path` and sets its permission `mode`.
///
/// # Errors
///
/// - `KitError::AlreadyExists` if anything already exists at `path`.
/// - `KitError::Io` if the file cannot be created or its mode cannot be set.
pub fn create_file(path: &Path, mode: u32) -> Result<()> {
    require_absent(path, "File")?;
    fs::File::create(path).map_err(|e| KitError::io(path, e))?;
    set_mode(path, mode)?;
    info!("Created file: {:?}", path);
    Ok(())
}

/// Deletes the file at `path`.
///
/// # Errors
///
/// - `KitError::NotFound` if `path` does not exist.
/// - `KitError::Io` if the file cannot be removed.
pub fn delete_file(path: &Path) -> Result<()> {
    require_exists(path, "File")?;
    fs::remove_file(path).map_err(|e| KitError::io(path, e))?;
    info!("Deleted file: {:?}", path);
    Ok(())
}

/// Reads the whole file at `path` into memory.
///
/// # Errors
///
/// - `KitError::NotFound` if `path` does not exist.
/// - `KitError::Io` if the file cannot be read.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    require_exists(path, "File")?;
    let data = fs::read(path).map_err(|e| KitError::io(path, e))?;
    debug!("Read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Creates a new file at `path`, writes `data`, flushes it to disk, and sets `mode`.
///
/// # Errors
///
/// - `KitError::AlreadyExists` if anything already exists at `path`.
/// - `KitError::Io` if creating, writing, syncing, or setting the mode fails.
pub fn write_file(path: &Path, mode: u32, data: &[u8]) -> Result<()> {
    require_absent(path, "File")?;
    let mut file = fs::File::create(path).map_err(|e| KitError::io(path, e))?;
    file.write_all(data).map_err(|e| KitError::io(path, e))?;
    file.sync_all().map_err(|e| KitError::io(path, e))?;
    set_mode(path, mode)?;
    info!("Wrote {} bytes to file: {:?}", data.len(), path);
    Ok(())
}

/// Ensures that a directory exists at the specified path.
///
/// Missing directories are created together with any missing parents (similar to
/// `mkdir -p`). An existing directory is left untouched.
///
/// # Errors
///
/// - `KitError::AlreadyExists` if the path exists but is not a directory.
/// - `KitError::Io` if creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| KitError::io(path, e))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        return Err(KitError::AlreadyExists(format!(
            "Path exists but is not a directory: {:?}",
            path
        ))
        .into());
    }
    Ok(())
}

/// Returns the home directory of the executing user.
///
/// # Errors
///
/// `KitError::NotFound` if the platform offers no way to determine it.
pub fn home_directory() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| KitError::NotFound("Could not determine the home directory".into()).into())
}

/// Applies unix permission bits to `path`. A no-op on other platforms.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| KitError::io(path, e))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}

fn require_exists(path: &Path, what: &str) -> Result<()> {
    if path_not_exists(path)? {
        return Err(
            KitError::NotFound(format!("{} '{}' doesn't exist", what, path.display())).into(),
        );
    }
    Ok(())
}

fn require_absent(path: &Path, what: &str) -> Result<()> {
    if path_exists(path)? {
        return Err(
            KitError::AlreadyExists(format!("{} '{}' already exists", what, path.display()))
                .into(),
        );
    }
    Ok(())
}
