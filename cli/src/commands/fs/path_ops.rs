//! `clikit fs exists|ext|home|ln`.
use crate::commands::CommandContext;
use clikit::common::fs;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ExistsArgs {
    path: PathBuf,
    /// Report absence instead (prints `true` when the path does not exist).
    #[arg(long)]
    not: bool,
}

#[derive(Parser, Debug)]
pub struct ExtArgs {
    path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct LnArgs {
    /// Existing file or directory the link points to.
    source: PathBuf,
    /// Path of the link to create.
    target: PathBuf,
}

/// Prints `true` or `false`. Only a failed stat is an error.
pub fn handle_exists(args: ExistsArgs, ctx: &mut CommandContext) -> Result<()> {
    let answer = if args.not {
        fs::path_not_exists(&args.path)?
    } else {
        fs::path_exists(&args.path)?
    };
    ctx.logger.print(format_args!("{}", answer));
    Ok(())
}

pub fn handle_ext(args: ExtArgs, ctx: &mut CommandContext) -> Result<()> {
    let extension = fs::file_extension(&args.path)?;
    ctx.logger.print(format_args!("{}", extension));
    Ok(())
}

pub fn handle_home(ctx: &mut CommandContext) -> Result<()> {
    let home = fs::home_directory()?;
    ctx.logger.print(format_args!("{}", home.display()));
    Ok(())
}

pub fn handle_ln(args: LnArgs, ctx: &mut CommandContext) -> Result<()> {
    fs::create_symlink(&args.source, &args.target)?;
    ctx.logger.vprint(format_args!(
        "Linked {} -> {}",
        args.target.display(),
        args.source.display()
    ));
    Ok(())
}
