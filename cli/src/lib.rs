//! # clikit
//!
//! File: cli/src/lib.rs
//!
//! Small utilities for command-line tools: zip archive creation and extraction,
//! HTTP(S) downloads, strict filesystem helpers and a leveled console logger.
//! The `clikit` binary (`main.rs`) exposes the same functionality as subcommands.
//!
//! ```rust,no_run
//! use clikit::common::{archive, network};
//! use std::path::Path;
//!
//! # async fn run() -> clikit::core::error::Result<()> {
//! network::download("https://example.com/site.zip", Path::new("site.zip")).await?;
//! archive::unarchive(Path::new("site.zip"), Path::new("public"))?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod core;
