//! # clikit Filesystem Link Operations
//!
//! File: cli/src/common/fs/links.rs
//!
//! ## Overview
//!
//! This module provides cross-platform creation of symbolic links.
//!
//! ## Architecture
//!
//! The primary function is `create_symlink`. Its logic includes:
//! - **Source Validation:** The `source` path (what the link points to) must exist.
//! - **Target Parent Creation:** The parent directory of `target` is created if needed.
//! - **Existing Target Handling:**
//!     - If `target` is already a symlink resolving to the same canonical `source`,
//!       nothing is done (idempotent).
//!     - Anything else at `target` is left untouched and reported as `AlreadyExists`.
//! - **Platform-Specific Link Creation:** `std::os::unix::fs::symlink` on Unix-like
//!   systems, `symlink_dir` / `symlink_file` on Windows.
//!
//! ## Usage
//!
//! ```rust
//! use clikit::common::fs::links;
//! use clikit::core::error::Result;
//!
//! # fn run_example() -> Result<()> {
//! # let tmp = tempfile::tempdir()?;
//! # std::fs::write(tmp.path().join("init.lua"), "-- config")?;
//! let source = tmp.path().join("init.lua");
//! let target = tmp.path().join("nvim/init.lua");
//!
//! links::create_symlink(&source, &target)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::core::error::{KitError, Result};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Creates a symbolic link at `target` pointing to `source`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The `source` path does not exist (`KitError::NotFound`).
/// - Something other than the correct link already occupies `target`
///   (`KitError::AlreadyExists`).
/// - The parent directory of `target` cannot be created, or the link itself cannot
///   be created (`KitError::Io`).
/// - The platform is neither Unix nor Windows.
pub fn create_symlink(source: &Path, target: &Path) -> Result<()> {
    info!("Creating symlink from {:?} to {:?}", source, target);

    if !source.exists() {
        return Err(
            KitError::NotFound(format!("Source '{}' doesn't exist", source.display())).into(),
        );
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)
            .with_context(|| format!("Failed to create parent directory for target {:?}", target))?;
    }

    // `symlink_metadata` does not follow links, so dangling links count as present.
    if target.symlink_metadata().is_ok() {
        if let Ok(existing_link_target_path) = std::fs::read_link(target) {
            debug!(
                "Target {:?} exists and is a symlink pointing to {:?}",
                target, existing_link_target_path
            );

            let canonical_source = source
                .canonicalize()
                .unwrap_or_else(|_| source.to_path_buf());
            // Relative link targets resolve against the link's own directory.
            let target_parent = target.parent().unwrap_or_else(|| Path::new("."));
            let canonical_existing_target = target_parent
                .join(&existing_link_target_path)
                .canonicalize()
                .unwrap_or(existing_link_target_path);

            if canonical_source == canonical_existing_target {
                debug!("Symlink already exists and is correct: {:?}", target);
                return Ok(());
            }
        }

        return Err(KitError::AlreadyExists(format!(
            "Symlink target '{}' already exists",
            target.display()
        ))
        .into());
    }

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(source, target).map_err(|e| KitError::io(target, e))?;
        info!("Created symlink: {:?} -> {:?}", target, source);
    }
    #[cfg(windows)]
    {
        if source.is_dir() {
            std::os::windows::fs::symlink_dir(source, target)
                .map_err(|e| KitError::io(target, e))?;
        } else {
            std::os::windows::fs::symlink_file(source, target)
                .map_err(|e| KitError::io(target, e))?;
        }
        info!("Created symlink: {:?} -> {:?}", target, source);
    }
    #[cfg(not(any(unix, windows)))]
    {
        anyhow::bail!("Symlink creation not implemented for this platform.");
    }

    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::kit_error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_create_symlink_basic() -> Result<()> {
        let dir = tempdir()?;
        let source_file = dir.path().join("source.txt");
        let target_link = dir.path().join("target.link");
        fs::write(&source_file, "test")?;
        create_symlink(&source_file, &target_link)?;
        assert!(target_link.is_symlink(), "Target should be a symlink");
        assert_eq!(fs::read_link(&target_link)?, source_file);
        assert_eq!(fs::read_to_string(&target_link)?, "test");
        Ok(())
    }

    #[test]
    fn test_create_symlink_creates_parent() -> Result<()> {
        let dir = tempdir()?;
        let source_file = dir.path().join("source.txt");
        let target_link = dir.path().join("nested/deeper/target.link");
        fs::write(&source_file, "test")?;
        create_symlink(&source_file, &target_link)?;
        assert!(target_link.is_symlink());
        Ok(())
    }

    #[test]
    fn test_create_symlink_already_correct() -> Result<()> {
        let dir = tempdir()?;
        let source_file = dir.path().join("source.txt");
        let target_link = dir.path().join("target.link");
        fs::write(&source_file, "test")?;
        create_symlink(&source_file, &target_link)?;
        // Second call is a no-op.
        create_symlink(&source_file, &target_link)?;
        assert_eq!(fs::read_link(&target_link)?, source_file);
        Ok(())
    }

    #[test]
    fn test_create_symlink_target_occupied() -> Result<()> {
        let dir = tempdir()?;
        let source_file = dir.path().join("source.txt");
        let target_link = dir.path().join("target.link");
        fs::write(&source_file, "source")?;
        fs::write(&target_link, "original target")?;

        let err = create_symlink(&source_file, &target_link).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::AlreadyExists(_))));
        // The occupant is untouched.
        assert_eq!(fs::read_to_string(&target_link)?, "original target");
        Ok(())
    }

    #[test]
    fn test_create_symlink_source_missing() {
        let dir = tempdir().unwrap();
        let source_file = dir.path().join("nonexistent_source.txt");
        let target_link = dir.path().join("target.link");
        let err = create_symlink(&source_file, &target_link).unwrap_err();
        assert!(matches!(kit_error(&err), Some(KitError::NotFound(_))));
        assert!(!target_link.exists());
    }
}
