use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::ResolutionMode;

/// agreetui - compose multi-contract agreements with per-contract prices
#[derive(Parser, Debug)]
#[command(name = "agreetui")]
#[command(about = "Guided terminal flow for multi-contract agreements and their price overrides")]
#[command(version)]
pub struct Cli {
    /// How per-contract overrides resolve into payload prices.
    ///
    /// `verbatim` sends an override set as-is and no prices for untouched
    /// contracts. `delta` records overrides as changes against the common
    /// prices, so untouched contracts inherit them.
    #[arg(long, global = true, default_value = "verbatim")]
    pub resolution: ResolutionMode,

    /// Scenario file describing the initial session (defaults to the demo session)
    #[arg(long, global = true)]
    pub scenario: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard (default)
    Wizard,
    /// Print the derived submission payload and exit
    Payload {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Validate a scenario file against the catalog
    Validate {
        /// Path to the scenario file to validate
        scenario: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
