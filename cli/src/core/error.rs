//! # clikit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by every clikit utility. The
//! archive, download, and filesystem helpers all report failures through the same
//! small set of categories so callers can decide, per category, whether to log,
//! clean up partial output, or give up.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `KitError`: A custom error enum using `thiserror` for the specific categories
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The categories are:
//! - `InvalidArgument`: empty or malformed input paths and URLs
//! - `NotFound`: an expected filesystem entry or archive is missing
//! - `AlreadyExists`: destination collision on create-only operations
//! - `Io`: generic read/write/permission failure on a given path
//! - `Network`: transfer failure (transport error or non-success HTTP status)
//! - `Archive`: a zip container could not be written or decoded
//! - `Config`: invalid configuration values
//!
//! Errors are never retried or rolled back. Every operation stops at the first
//! failure and leaves the filesystem in whatever state the completed steps produced.
//!
//! ## Examples
//!
//! ```rust
//! use clikit::core::error::{KitError, Result};
//!
//! fn check(source: &str) -> Result<()> {
//!     if source.is_empty() {
//!         return Err(KitError::InvalidArgument("source is empty".into()).into());
//!     }
//!     Ok(())
//! }
//!
//! let err = check("").unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<KitError>(),
//!     Some(KitError::InvalidArgument(_))
//! ));
//! ```
//!
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error type for the clikit utilities.
#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Archive error: {source}")]
    Archive {
        #[from]
        source: zip::result::ZipError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KitError {
    /// Wraps an `io::Error` together with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        KitError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// `KitError` values survive added context and can be recovered with `downcast_ref`.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `KitError` carried by an `anyhow::Error`, if any.
pub fn kit_error(err: &anyhow::Error) -> Option<&KitError> {
    err.downcast_ref::<KitError>()
}
