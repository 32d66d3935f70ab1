//! # clikit Archive Command (`clikit archive`)
//!
//! File: cli/src/commands/archive.rs
//!
//! ## Overview
//!
//! Writes `SOURCE` (a file or a directory tree) into a new zip at `TARGET`.
//! Directory sources are stored under their own base name, so archiving
//! `build/` produces entries like `build/app.bin`; archiving `.` stores the
//! current directory's contents without a prefix.
//!
//! ```bash
//! clikit archive ./build dist/build.zip
//! ```
//!
use super::CommandContext;
use clikit::common::archive;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `clikit archive`.
#[derive(Parser, Debug)]
#[command(about = "Create a zip archive from a file or directory")]
pub struct ArchiveArgs {
    /// File or directory to archive.
    source: PathBuf,
    /// Path of the zip file to create (overwritten if present).
    target: PathBuf,
}

pub async fn handle_archive(args: ArchiveArgs, ctx: &mut CommandContext) -> Result<()> {
    info!("Handling archive command (args: {:?})", args);

    archive::archive(&args.source, &args.target)?;

    ctx.logger.success(format_args!(
        "Archived {} to {}",
        args.source.display(),
        args.target.display()
    ));
    Ok(())
}
