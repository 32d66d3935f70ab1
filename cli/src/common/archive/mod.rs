//! # clikit Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module is the entry point for zip archive handling: creating a container
//! from a directory tree, extracting a container into a directory, and listing
//! what a container holds.
//!
//! ## Architecture
//!
//! - **`naming`**: The path normalizer. Maps filesystem paths to `/`-separated entry
//!   names during creation, and entry names back to extraction paths.
//! - **`zip`**: The archive writer (`archive`), reader (`unarchive`), and
//!   `list_entries`, built on the `zip` and `walkdir` crates.
//!
//! Remote archives are fetched by `common::network::download`; this module only
//! deals with local files.
//!
//! ## Usage
//!
//! ```rust
//! use clikit::common::archive;
//! use clikit::core::error::Result;
//!
//! # fn run() -> Result<()> {
//! # let tmp = tempfile::tempdir()?;
//! # std::fs::create_dir(tmp.path().join("docs"))?;
//! # std::fs::write(tmp.path().join("docs/readme.md"), "# hi")?;
//! let bundle = tmp.path().join("docs.zip");
//! archive::archive(&tmp.path().join("docs"), &bundle)?;
//!
//! for entry in archive::list_entries(&bundle)? {
//!     println!("{} ({} bytes)", entry.name, entry.size);
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod naming;
pub mod zip;

pub use self::zip::{archive, list_entries, unarchive, ArchiveEntry};
pub use naming::PathNormalizer;
