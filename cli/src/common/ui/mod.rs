//! # clikit UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output for command results. The only component is the leveled,
//! color-tagged console [`Logger`](logger::Logger).
//!
pub mod logger;

pub use logger::{Logger, LoggerConfig};
