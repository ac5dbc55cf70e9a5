//! Command-line front end for the MoOn Split distribution engine: layered
//! configuration, request loading, logging setup and report rendering.

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;

pub use cli::{Cli, Command, CommandOutput, OutputFormat, RoundingArg, Runner};
pub use config::{ConfigSource, MoonSplitConfig};
