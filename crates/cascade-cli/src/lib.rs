//! Library half of the `cascade` tool.
//!
//! Loads stylesheet trees written in tree notation, runs the `@inherit`
//! pass over them and renders the result.

pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod input;

pub use config::{Config, OutputFormat};
pub use input::{load_tree, InputError};

/// Re-export common error types
pub use anyhow::{Error, Result};
