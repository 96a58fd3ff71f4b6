//! rinterlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod bot;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Run => cli::commands::run::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; the resulting value is immutable for the rest of
    // the process and gets passed down explicitly
    let mut cfg = Config::load();

    // per-invocation override of the log directory
    if let Some(custom_dir) = &cli.data_dir {
        cfg.data_dir = custom_dir.clone();
    }

    dispatch(&cli, &cfg)
}
