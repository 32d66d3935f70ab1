//! # clikit Console Logger (`common::ui::logger`)
//!
//! File: cli/src/common/ui/logger.rs
//!
//! ## Overview
//!
//! User-facing, leveled console output. Each call writes exactly one line made of an
//! optional tag (`INFO: `, `SUCCESS: `, ...) followed by the message, colored per
//! level with the `console` crate. There are no timestamps.
//!
//! This is separate from the `tracing` diagnostics initialised in `main.rs`: tracing
//! goes to stderr and is aimed at debugging clikit itself, while the `Logger` prints
//! what a command reports to its user.
//!
//! ## Levels
//!
//! | method    | shown when      | tag         | color         |
//! |-----------|-----------------|-------------|---------------|
//! | `print`   | always          |             | bright cyan   |
//! | `vprint`  | `verbose`       | `INFO: `    | bright cyan   |
//! | `success` | always          | `SUCCESS: ` | bright green  |
//! | `warning` | always          | `WARNING: ` | bright yellow |
//! | `failure` | always          | `FAILURE: ` | bright red    |
//! | `error`   | always          | `ERROR: `   | bright red    |
//! | `debug`   | `debug`         | `DEBUG: `   | none          |
//! | `trace`   | `trace`         | `TRACE: `   | none          |
//! | `panic`   | always, panics  | `PANIC: `   | bright red    |
//! | `fatal`   | always, exit 1  | `FATAL: `   | bright red    |
//!
//! Every method takes `std::fmt::Arguments`, so plain and formatted messages share
//! one entry point:
//!
//! ```rust
//! use clikit::common::ui::logger::{Logger, LoggerConfig};
//!
//! let mut out = Vec::new();
//! let mut logger = Logger::with_writer(LoggerConfig::plain(), &mut out);
//! logger.success(format_args!("Extracted {} entries", 3));
//! logger.vprint(format_args!("hidden unless verbose"));
//! drop(logger);
//! assert_eq!(String::from_utf8(out).unwrap(), "SUCCESS: Extracted 3 entries\n");
//! ```
//!
//! Write failures on the underlying stream are ignored; a logger has nowhere left to
//! report them.
//!
use crate::core::config::LoggingConfig;
use console::Style;
use std::fmt::Arguments;
use std::io::{self, Stdout, Write};

/// Which levels are shown and whether ANSI styling is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub verbose: bool,
    pub debug: bool,
    pub trace: bool,
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
            trace: false,
            color: console::colors_enabled(),
        }
    }
}

impl LoggerConfig {
    /// Default levels with colors forced off.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

impl From<&LoggingConfig> for LoggerConfig {
    /// `color = true` in the config still defers to terminal detection.
    fn from(config: &LoggingConfig) -> Self {
        Self {
            verbose: config.verbose,
            debug: config.debug,
            trace: config.trace,
            color: config.color && console::colors_enabled(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Print,
    Info,
    Success,
    Warning,
    Failure,
    Error,
    Debug,
    Trace,
    Panic,
    Fatal,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Print => "",
            Level::Info => "INFO: ",
            Level::Success => "SUCCESS: ",
            Level::Warning => "WARNING: ",
            Level::Failure => "FAILURE: ",
            Level::Error => "ERROR: ",
            Level::Debug => "DEBUG: ",
            Level::Trace => "TRACE: ",
            Level::Panic => "PANIC: ",
            Level::Fatal => "FATAL: ",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Print | Level::Info => Style::new().cyan().bright(),
            Level::Success => Style::new().green().bright(),
            Level::Warning => Style::new().yellow().bright(),
            Level::Failure | Level::Error | Level::Panic | Level::Fatal => {
                Style::new().red().bright()
            }
            Level::Debug | Level::Trace => Style::new(),
        }
    }
}

/// Leveled console logger writing to `W` (stdout by default).
pub struct Logger<W: Write = Stdout> {
    config: LoggerConfig,
    out: W,
}

impl Logger<Stdout> {
    /// Creates a logger writing to stdout.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn with_writer(config: LoggerConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn enable_verbose(&mut self, enabled: bool) {
        self.config.verbose = enabled;
    }

    pub fn enable_debug(&mut self, enabled: bool) {
        self.config.debug = enabled;
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.config.trace = enabled;
    }

    pub fn print(&mut self, args: Arguments<'_>) {
        self.emit(Level::Print, args);
    }

    /// Prints an `INFO:` line when verbose output is enabled.
    pub fn vprint(&mut self, args: Arguments<'_>) {
        if self.config.verbose {
            self.emit(Level::Info, args);
        }
    }

    pub fn success(&mut self, args: Arguments<'_>) {
        self.emit(Level::Success, args);
    }

    pub fn warning(&mut self, args: Arguments<'_>) {
        self.emit(Level::Warning, args);
    }

    pub fn failure(&mut self, args: Arguments<'_>) {
        self.emit(Level::Failure, args);
    }

    pub fn error(&mut self, args: Arguments<'_>) {
        self.emit(Level::Error, args);
    }

    pub fn debug(&mut self, args: Arguments<'_>) {
        if self.config.debug {
            self.emit(Level::Debug, args);
        }
    }

    pub fn trace(&mut self, args: Arguments<'_>) {
        if self.config.trace {
            self.emit(Level::Trace, args);
        }
    }

    /// Prints a `PANIC:` line, then panics with the same message.
    pub fn panic(&mut self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        self.emit(Level::Panic, format_args!("{}", message));
        panic!("{}", message);
    }

    /// Prints a `FATAL:` line, then exits the process with status 1.
    pub fn fatal(&mut self, args: Arguments<'_>) -> ! {
        self.emit(Level::Fatal, args);
        std::process::exit(1);
    }

    fn emit(&mut self, level: Level, args: Arguments<'_>) {
        let line = format!("{}{}", level.tag(), args);
        let styled = level.style().force_styling(self.config.color).apply_to(line);
        let _ = writeln!(self.out, "{}", styled);
        let _ = self.out.flush();
    }
}
