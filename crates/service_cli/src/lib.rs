//! Service layer for the almanac engines.
//!
//! This crate wires `almanac_core` to the outside world: configuration
//! loading, a file-backed temperature sample source, and the command
//! implementations behind the `almanac` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod source;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
