//! virada library root.
//! Exposes the schedule engine, the CLI parser, the high-level run() function
//! and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_to_string;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Venues => cli::commands::venues::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Attend { .. } => cli::commands::attend::handle(&cli.command, cfg),
        Commands::Now { .. } => cli::commands::now::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = expand_to_string(custom_db);
    }
    if let Some(dataset) = &cli.dataset {
        cfg.dataset = Some(expand_to_string(dataset));
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
