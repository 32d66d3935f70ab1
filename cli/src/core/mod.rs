//! # clikit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every clikit utility
//! and command: the error taxonomy and the configuration system.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: The `KitError` taxonomy and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use clikit::core::config; // For loading configuration
//! use clikit::core::error::{KitError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
