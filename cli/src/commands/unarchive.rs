//! # clikit Unarchive Command (`clikit unarchive`)
//!
//! File: cli/src/commands/unarchive.rs
//!
//! ## Overview
//!
//! Extracts every entry of the zip at `SOURCE` below `TARGET`, creating missing
//! directories along the way. Without `TARGET`, the `[archive] default_extract_dir`
//! setting is used, falling back to the current directory.
//!
//! ```bash
//! clikit unarchive dist/build.zip ./restored
//! ```
//!
use super::CommandContext;
use clikit::common::archive;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for `clikit unarchive`.
#[derive(Parser, Debug)]
#[command(about = "Extract a zip archive into a directory")]
pub struct UnarchiveArgs {
    /// Zip file to extract.
    source: PathBuf,
    /// Destination directory. Defaults to the configured extract dir, else `.`.
    target: Option<PathBuf>,
}

/// Picks the extraction directory: explicit argument, then config, then "" (cwd).
fn resolve_target(args: &UnarchiveArgs, ctx: &CommandContext) -> PathBuf {
    args.target
        .clone()
        .or_else(|| ctx.config.archive.default_extract_dir.as_ref().map(PathBuf::from))
        .unwrap_or_default()
}

pub async fn handle_unarchive(args: UnarchiveArgs, ctx: &mut CommandContext) -> Result<()> {
    info!("Handling unarchive command (args: {:?})", args);

    let target = resolve_target(&args, ctx);
    debug!("Resolved extraction target: {:?}", target);

    archive::unarchive(&args.source, &target)?;

    let shown = if target.as_os_str().is_empty() {
        ".".to_string()
    } else {
        target.display().to_string()
    };
    ctx.logger.success(format_args!(
        "Extracted {} into {}",
        args.source.display(),
        shown
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clikit::common::ui::{Logger, LoggerConfig};
    use clikit::core::config::Config;

    fn context(default_extract_dir: Option<&str>) -> CommandContext {
        let mut config = Config::default();
        config.archive.default_extract_dir = default_extract_dir.map(str::to_string);
        CommandContext {
            config,
            logger: Logger::new(LoggerConfig::plain()),
        }
    }

    #[test]
    fn test_target_is_optional() {
        let args = UnarchiveArgs::try_parse_from(["unarchive", "a.zip"]).unwrap();
        assert_eq!(args.target, None);
    }

    #[test]
    fn test_resolve_target_precedence() {
        let explicit = UnarchiveArgs::try_parse_from(["unarchive", "a.zip", "out"]).unwrap();
        let implicit = UnarchiveArgs::try_parse_from(["unarchive", "a.zip"]).unwrap();

        let configured = context(Some("/srv/unpacked"));
        assert_eq!(resolve_target(&explicit, &configured), PathBuf::from("out"));
        assert_eq!(
            resolve_target(&implicit, &configured),
            PathBuf::from("/srv/unpacked")
        );

        let unconfigured = context(None);
        assert_eq!(resolve_target(&implicit, &unconfigured), PathBuf::new());
    }
}
