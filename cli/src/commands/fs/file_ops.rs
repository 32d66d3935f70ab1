//! `clikit fs touch|rm|cat|write`.
use super::parse_mode;
use crate::commands::CommandContext;
use clikit::common::fs;
use clikit::core::error::{KitError, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct TouchArgs {
    /// File to create. Must not exist yet.
    path: PathBuf,
    #[arg(long, short, default_value = "644", value_parser = parse_mode)]
    mode: u32,
}

#[derive(Parser, Debug)]
pub struct RmArgs {
    /// File to delete.
    path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CatArgs {
    /// File to print.
    path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to create. Must not exist yet.
    path: PathBuf,
    /// Content to write. Read from stdin when omitted.
    content: Option<String>,
    #[arg(long, short, default_value = "644", value_parser = parse_mode)]
    mode: u32,
}

pub fn handle_touch(args: TouchArgs, ctx: &mut CommandContext) -> Result<()> {
    fs::create_file(&args.path, args.mode)?;
    ctx.logger
        .vprint(format_args!("Created {}", args.path.display()));
    Ok(())
}

pub fn handle_rm(args: RmArgs, ctx: &mut CommandContext) -> Result<()> {
    fs::delete_file(&args.path)?;
    ctx.logger
        .vprint(format_args!("Deleted {}", args.path.display()));
    Ok(())
}

/// Copies the raw bytes to stdout; content is not necessarily text.
pub fn handle_cat(args: CatArgs) -> Result<()> {
    let data = fs::read_file(&args.path)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&data)
        .and_then(|()| stdout.flush())
        .map_err(|e| KitError::io("<stdout>", e))?;
    Ok(())
}

pub fn handle_write(args: WriteArgs, ctx: &mut CommandContext) -> Result<()> {
    let data = match args.content {
        Some(content) => content.into_bytes(),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| KitError::io("<stdin>", e))?;
            buffer
        }
    };
    fs::write_file(&args.path, args.mode, &data)?;
    ctx.logger.vprint(format_args!(
        "Wrote {} bytes to {}",
        data.len(),
        args.path.display()
    ));
    Ok(())
}
