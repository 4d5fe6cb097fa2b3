//! CLI definition using clap

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use matreg_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matreg")]
#[command(version)]
#[command(about = "Register purchased materials: validate, total, and submit")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Creation endpoint override
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Fields of the material draft
#[derive(Args, Debug, Clone, Default)]
pub struct MaterialArgs {
    /// JSON file holding a material draft; flags below override its fields
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Material code
    #[arg(long)]
    pub code: Option<String>,

    /// Material description
    #[arg(long)]
    pub description: Option<String>,

    /// Unit cost (e.g. "10.50" or "10,50")
    #[arg(long)]
    pub unit_cost: Option<String>,

    /// Quantity
    #[arg(long)]
    pub quantity: Option<String>,

    /// Acquisition date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Supplier name
    #[arg(long)]
    pub supplier: Option<String>,

    /// Additional cost (freight, taxes, ...). Repeat for several entries.
    #[arg(long = "cost")]
    pub costs: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a material and post it to the creation endpoint
    Register(MaterialArgs),

    /// Validate a material and show its total without sending it
    Validate(MaterialArgs),

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set creation endpoint
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Set request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
