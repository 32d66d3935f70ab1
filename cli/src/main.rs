//! # clikit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the clikit CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up `tracing` diagnostics based on verbosity flags
//! - Loading configuration and building the console logger
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! clikit --help
//!
//! # Archive a directory, then extract it elsewhere with verbose output
//! clikit archive ./site site.zip
//! clikit -v unarchive site.zip /srv/www
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure `tracing` on stderr (`-v` count, or `RUST_LOG`)
//! 3. Load config and apply flag overrides to the logger
//! 4. Route to the command handler
//! 5. Print any error as `ERROR: ...` and exit with status 1
//!
use clap::Parser;
use clikit::common::ui::{Logger, LoggerConfig};
use clikit::core::config::{self, Config};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(
    name = "clikit",
    about = "Archive, extract and download zip files; small filesystem helpers",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase output (`-v` shows INFO lines; more also raises diagnostics).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Show DEBUG lines.
    #[arg(long, global = true)]
    debug: bool,
    /// Show TRACE lines.
    #[arg(long, global = true)]
    trace: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Archive(commands::archive::ArchiveArgs),
    #[command(alias = "x")]
    Unarchive(commands::unarchive::UnarchiveArgs),
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    Download(commands::download::DownloadArgs),
    Fs(commands::fs::FsArgs),
}

impl Cli {
    /// Config values first, then flags on top. Flags only ever switch levels on.
    fn logger_config(&self, config: &Config) -> LoggerConfig {
        let mut logger_config = LoggerConfig::from(&config.logging);
        logger_config.verbose |= self.verbose > 0;
        logger_config.debug |= self.debug;
        logger_config.trace |= self.trace;
        if self.no_color {
            logger_config.color = false;
        }
        logger_config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            let fallback = cli.logger_config(&Config::default());
            Logger::new(fallback).error(format_args!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut ctx = CommandContext {
        logger: Logger::new(cli.logger_config(&config)),
        config,
    };

    let command_result = match cli.command {
        Commands::Archive(args) => commands::archive::handle_archive(args, &mut ctx).await,
        Commands::Unarchive(args) => commands::unarchive::handle_unarchive(args, &mut ctx).await,
        Commands::List(args) => commands::list::handle_list(args, &mut ctx).await,
        Commands::Download(args) => commands::download::handle_download(args, &mut ctx).await,
        Commands::Fs(args) => commands::fs::handle_fs(args, &mut ctx).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        ctx.logger.error(format_args!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
