//! cucostatus library root.
//! Exposes the work-time engine (`core`), its collaborators (`adapters`),
//! the CLI parser and the high-level run() function.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::resolve_config_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, ctx),
        Commands::Exit { .. } => cli::commands::exit::handle(&cli.command, ctx),
        Commands::Sets { .. } => cli::commands::sets::handle(&cli.command, ctx),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Ack { .. } => cli::commands::ack::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref());
    let cfg = Config::load_from(&config_path)?;

    utils::logging::init(cli.verbose, &cfg.log_level);

    let ctx = Context {
        cfg: &cfg,
        config_path: &config_path,
        test: cli.test,
    };
    dispatch(&cli, &ctx)
}
