//! matreg - material registration from the command line
//!
//! Validates a material draft, shows its total cost, and posts it to the
//! configured creation endpoint.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;
use logging::{init_logging, LogConfig};
use matreg_types::Error;

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        let code = match e {
            Error::Validation(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
