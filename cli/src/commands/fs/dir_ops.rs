//! `clikit fs mkdir` and `clikit fs rmdir`.
use super::parse_mode;
use crate::commands::CommandContext;
use clikit::common::fs;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct MkdirArgs {
    /// Directory to create.
    path: PathBuf,
    /// Octal permission mode for the new directory.
    #[arg(long, short, default_value = "755", value_parser = parse_mode)]
    mode: u32,
    /// Create missing parents and accept an existing directory.
    #[arg(long, short)]
    parents: bool,
}

#[derive(Parser, Debug)]
pub struct RmdirArgs {
    /// Directory to remove.
    path: PathBuf,
    /// Remove the directory and everything below it.
    #[arg(long, short)]
    recursive: bool,
}

pub fn handle_mkdir(args: MkdirArgs, ctx: &mut CommandContext) -> Result<()> {
    if args.parents {
        fs::ensure_dir_exists(&args.path)?;
    } else {
        fs::create_directory(&args.path, args.mode)?;
    }
    ctx.logger
        .vprint(format_args!("Created directory {}", args.path.display()));
    Ok(())
}

pub fn handle_rmdir(args: RmdirArgs, ctx: &mut CommandContext) -> Result<()> {
    if args.recursive {
        fs::delete_directory_all(&args.path)?;
    } else {
        fs::delete_directory(&args.path)?;
    }
    ctx.logger
        .vprint(format_args!("Removed directory {}", args.path.display()));
    Ok(())
}
