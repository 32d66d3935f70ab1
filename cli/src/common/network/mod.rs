//! # clikit Network Utilities (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Network-facing helpers. Currently this is the HTTP(S) file download used to
//! fetch archives before unpacking them:
//!
//! - **`download`**: `download`, `download_with_client`, `build_client`, and the
//!   URL validation they share.
//!
pub mod download;

pub use download::{build_client, download, download_with_client};
