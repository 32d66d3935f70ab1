//! # clikit Archive Entry Naming (`common::archive::naming`)
//!
//! File: cli/src/common/archive/naming.rs
//!
//! ## Overview
//!
//! Zip entry names are relative, `/`-separated paths regardless of the host OS.
//! This module converts between filesystem paths and those names in both
//! directions:
//!
//! - **Creation:** [`PathNormalizer::archive_name`] maps each path visited under the
//!   archive source to its entry name, rooted at the source's base directory name.
//!   Archiving `/tmp/foo` yields names like `foo/bar.txt`; the root itself (`foo`)
//!   is reported as "skip" so it is never written as an entry.
//! - **Extraction:** [`extraction_path`] joins an entry name onto the extraction
//!   target, defaulting to the current directory when the target is empty.
//!
//! A base directory name of `.` (archiving the current directory) keeps names
//! relative to the source, without a prefix. A single-file source has no base
//! directory; its one entry is named after the file itself.
//!
use crate::core::error::{KitError, Result};
use std::path::{Component, Path, PathBuf};

/// Computes archive entry names for paths visited under one archive source.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    source: PathBuf,
    base_dir: Option<String>,
}

impl PathNormalizer {
    /// Creates a normalizer for `source`. Only directory sources establish a base
    /// directory; file sources are named by their own file name.
    pub fn new(source: &Path, is_dir: bool) -> Self {
        Self {
            source: source.to_path_buf(),
            base_dir: is_dir.then(|| base_dir_name(source)),
        }
    }

    /// The base directory name used as the root prefix of every entry, if any.
    pub fn base_dir(&self) -> Option<&str> {
        self.base_dir.as_deref()
    }

    /// Returns the archive entry name for `visited`, or `None` when the path is the
    /// archive root and must not be written.
    ///
    /// Directory markers get their trailing `/` from the writer, not from here.
    pub fn archive_name(&self, visited: &Path) -> Option<String> {
        let Some(base) = self.base_dir.as_deref() else {
            return visited
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
        };

        let relative = visited.strip_prefix(&self.source).unwrap_or(visited);
        let relative = to_slash(relative);
        let name = if relative.is_empty() {
            base.to_string()
        } else if base == "." {
            relative
        } else {
            format!("{}/{}", base, relative)
        };

        (name != base).then_some(name)
    }
}

/// Returns the last component of `source`, or `.` when it has none (e.g. `.` or `..`).
pub fn base_dir_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

/// Joins `/`-separated path components, dropping `.` and root/prefix components.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns where the entry called `entry_name` is extracted below `target`.
///
/// An empty `target` means the current working directory.
///
/// # Errors
///
/// `KitError::InvalidArgument` if the entry name is absolute or contains `..`,
/// i.e. if it would land outside `target`.
pub fn extraction_path(target: &Path, entry_name: &str) -> Result<PathBuf> {
    let relative = Path::new(entry_name);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(KitError::InvalidArgument(format!(
            "Archive entry '{}' points outside the extraction target",
            entry_name
        ))
        .into());
    }

    let base = if target.as_os_str().is_empty() {
        Path::new(".")
    } else {
        target
    };
    Ok(base.join(relative))
}
