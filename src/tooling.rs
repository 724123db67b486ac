//! Tooling Layer
//!
//! Command-line access to the classifier service.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
