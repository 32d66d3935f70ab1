//! # clikit Filesystem Commands (`clikit fs`)
//!
//! File: cli/src/commands/fs/mod.rs
//!
//! ## Overview
//!
//! Thin command-line access to the `common::fs` helpers, mostly useful in shell
//! scripts that want the same strict semantics the library has: creating something
//! that already exists is an error, deleting something missing is an error.
//!
//! ## Subcommands
//!
//! - `mkdir PATH [--mode 755] [-p]`, `rmdir PATH [-r]` (in `dir_ops.rs`)
//! - `touch PATH [--mode 644]`, `rm PATH`, `cat PATH`, `write PATH [CONTENT] [--mode 644]`
//!   (in `file_ops.rs`)
//! - `exists PATH`, `ext PATH`, `home`, `ln SOURCE TARGET` (in `path_ops.rs`)
//!
//! Modes are octal strings (`755`, `0644`, `0o600`).
//!
use super::CommandContext;
use clikit::core::error::Result;
use clap::{Parser, Subcommand};

mod dir_ops;
mod file_ops;
mod path_ops;

/// Arguments for the `clikit fs` command group.
#[derive(Parser, Debug)]
pub struct FsArgs {
    #[command(subcommand)]
    command: FsCommand,
}

#[derive(Subcommand, Debug)]
enum FsCommand {
    /// Create a directory.
    Mkdir(dir_ops::MkdirArgs),
    /// Remove a directory.
    Rmdir(dir_ops::RmdirArgs),
    /// Create an empty file.
    Touch(file_ops::TouchArgs),
    /// Delete a file.
    Rm(file_ops::RmArgs),
    /// Print a file's contents.
    Cat(file_ops::CatArgs),
    /// Write a new file from an argument or stdin.
    Write(file_ops::WriteArgs),
    /// Report whether a path exists.
    Exists(path_ops::ExistsArgs),
    /// Print a path's lowercase extension.
    Ext(path_ops::ExtArgs),
    /// Print the current user's home directory.
    Home,
    /// Create a symbolic link.
    Ln(path_ops::LnArgs),
}

/// Dispatches `clikit fs <subcommand>`.
pub async fn handle_fs(args: FsArgs, ctx: &mut CommandContext) -> Result<()> {
    match args.command {
        FsCommand::Mkdir(args) => dir_ops::handle_mkdir(args, ctx)?,
        FsCommand::Rmdir(args) => dir_ops::handle_rmdir(args, ctx)?,
        FsCommand::Touch(args) => file_ops::handle_touch(args, ctx)?,
        FsCommand::Rm(args) => file_ops::handle_rm(args, ctx)?,
        FsCommand::Cat(args) => file_ops::handle_cat(args)?,
        FsCommand::Write(args) => file_ops::handle_write(args, ctx)?,
        FsCommand::Exists(args) => path_ops::handle_exists(args, ctx)?,
        FsCommand::Ext(args) => path_ops::handle_ext(args, ctx)?,
        FsCommand::Home => path_ops::handle_home(ctx)?,
        FsCommand::Ln(args) => path_ops::handle_ln(args, ctx)?,
    }
    Ok(())
}

/// Parses an octal permission string for clap (`755`, `0755`, `0o755`).
fn parse_mode(value: &str) -> std::result::Result<u32, String> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    let mode = u32::from_str_radix(digits, 8)
        .map_err(|_| format!("'{}' is not an octal permission mode", value))?;
    if mode > 0o7777 {
        return Err(format!("'{}' is out of range for a permission mode", value));
    }
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("755"), Ok(0o755));
        assert_eq!(parse_mode("0644"), Ok(0o644));
        assert_eq!(parse_mode("0o600"), Ok(0o600));
        assert!(parse_mode("rw-r--r--").is_err());
        assert!(parse_mode("9").is_err());
        assert!(parse_mode("17777").is_err());
    }

    #[test]
    fn test_fs_args_parsing() {
        let args = FsArgs::try_parse_from(["fs", "mkdir", "out", "--mode", "700"]).unwrap();
        assert!(matches!(args.command, FsCommand::Mkdir(_)));

        let args = FsArgs::try_parse_from(["fs", "home"]).unwrap();
        assert!(matches!(args.command, FsCommand::Home));

        assert!(FsArgs::try_parse_from(["fs", "ln", "only-source"]).is_err());
    }
}
