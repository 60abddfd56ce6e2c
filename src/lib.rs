//! questlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
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
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Quest { .. } => cli::commands::quest::handle(&cli.command, cfg),
        Commands::Kpi { .. } => cli::commands::kpi::handle(&cli.command, cfg),
        Commands::Mind { .. } => cli::commands::mind::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Board => cli::commands::board::handle(cfg),
        Commands::Daily => cli::commands::daily::handle(cfg),
        Commands::Kpis => cli::commands::kpis::handle(cfg),
        Commands::Watch => cli::commands::watch::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply CLI overrides
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }

    dispatch(&cli, &cfg)
}
