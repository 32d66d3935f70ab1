//! # clikit List Command (`clikit list`)
//!
//! File: cli/src/commands/list.rs
//!
//! Prints one entry name per line in archive order. With `-v`, each line also
//! shows the uncompressed size, compressed size and compression method.
//!
use super::CommandContext;
use clikit::common::archive;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `clikit list`.
#[derive(Parser, Debug)]
#[command(about = "List the entries of a zip archive")]
pub struct ListArgs {
    /// Zip file to inspect.
    archive: PathBuf,
}

pub async fn handle_list(args: ListArgs, ctx: &mut CommandContext) -> Result<()> {
    info!("Handling list command (args: {:?})", args);

    let entries = archive::list_entries(&args.archive)?;
    let detailed = ctx.logger.config().verbose;

    for entry in &entries {
        if detailed {
            ctx.logger.print(format_args!(
                "{:>10} {:>10} {:<8} {}",
                entry.size,
                entry.compressed_size,
                entry.compression.to_string(),
                entry.name
            ));
        } else {
            ctx.logger.print(format_args!("{}", entry.name));
        }
    }
    ctx.logger
        .vprint(format_args!("{} entries in {}", entries.len(), args.archive.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_parsing() {
        let args = ListArgs::try_parse_from(["list", "bundle.zip"]).unwrap();
        assert_eq!(args.archive, PathBuf::from("bundle.zip"));
        assert!(ListArgs::try_parse_from(["list"]).is_err());
    }
}
