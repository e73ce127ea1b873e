//! CLI argument parsing for tux-tyler.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The conversion itself lives in the `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert a Tyler tile map into a SuperTux level.
///
/// Reads a JSON grid of tile signatures, converts it to SuperTux tile IDs
/// and prints the resulting level document to stdout.
#[derive(Parser, Debug)]
#[command(name = "tux-tyler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for a conversion run.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Path to the Tyler JSON map (rows of `[tileset, index]` pairs).
    #[arg(required_unless_present = "dump_config")]
    pub input: Option<PathBuf>,

    /// YAML file overriding level metadata, entities, rules or templates.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Level name (overrides the config file).
    #[arg(long)]
    pub name: Option<String>,

    /// Level author (overrides the config file).
    #[arg(long)]
    pub author: Option<String>,

    /// Level license (overrides the config file).
    #[arg(long)]
    pub license: Option<String>,

    /// Print the effective configuration as YAML instead of converting.
    #[arg(long)]
    pub dump_config: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
