//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the
//! attendance pipeline modules.

pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli),
        Commands::Process { .. } => cli::commands::process::handle(cli),
        Commands::Convert { .. } => cli::commands::convert::handle(cli),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}
