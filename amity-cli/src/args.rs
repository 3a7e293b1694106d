//! Command argument structures
//!
//! This module contains the top-level CLI definition and the argument structs
//! of each command.

use crate::commands::Commands;
use crate::utils::parse_association;
use amity::relationships::Association;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "amity-cli")]
#[command(about = "Keep track of who you like, bounded and in proportion", long_about = None)]
#[command(version = amity::VERSION)]
pub struct Cli {
    /// Friend list file (defaults to the configured data directory)
    #[arg(long, short, global = true)]
    pub store: Option<PathBuf>,

    /// Lower bound for a new friend list
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Upper bound for a new friend list
    #[arg(long, global = true)]
    pub max: Option<f64>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true)]
    pub output: String,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct NameArgs {
    /// Player name
    pub name: String,
}

#[derive(Args)]
pub struct SetValueArgs {
    /// Player name
    pub name: String,

    /// Friendliness value; values beyond the bounds rescale the whole list
    #[arg(allow_hyphen_values = true)]
    pub value: f64,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show one association (ally, neutral, enemy)
    #[arg(long, short, value_parser = parse_association)]
    pub association: Option<Association>,

    /// Lowest value to include
    #[arg(long, allow_hyphen_values = true)]
    pub min_value: Option<f64>,

    /// Highest value to include
    #[arg(long, allow_hyphen_values = true)]
    pub max_value: Option<f64>,
}
