//! # clikit Download Command (`clikit download`)
//!
//! File: cli/src/commands/download.rs
//!
//! ## Overview
//!
//! Fetches `URL` with a single HTTP GET and writes the body to `TARGET`. The HTTP
//! client is built from the `[download]` configuration section (user agent and
//! optional connect timeout). A non-success status is an error and leaves no file.
//!
//! ```bash
//! clikit download https://example.com/tool.zip /tmp/tool.zip
//! clikit unarchive /tmp/tool.zip ~/tools
//! ```
//!
use super::CommandContext;
use clikit::common::network;
use clikit::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `clikit download`.
#[derive(Parser, Debug)]
#[command(about = "Download a file over HTTP(S)")]
pub struct DownloadArgs {
    /// Absolute http:// or https:// URL to fetch.
    url: String,
    /// Local file to write the response body to.
    target: PathBuf,
}

pub async fn handle_download(args: DownloadArgs, ctx: &mut CommandContext) -> Result<()> {
    info!("Handling download command (args: {:?})", args);

    let client = network::build_client(&ctx.config.download)?;
    ctx.logger
        .vprint(format_args!("Fetching {} ({})", args.url, ctx.config.download.user_agent));

    let written = network::download_with_client(&client, &args.url, &args.target).await?;

    ctx.logger.success(format_args!(
        "Downloaded {} bytes to {}",
        written,
        args.target.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_args_parsing() {
        let args =
            DownloadArgs::try_parse_from(["download", "https://example.com/a.zip", "a.zip"])
                .unwrap();
        assert_eq!(args.url, "https://example.com/a.zip");
        assert_eq!(args.target, PathBuf::from("a.zip"));
    }
}
