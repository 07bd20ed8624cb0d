//! volmgr library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::{Session, TokenStore};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &mut Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg, session),
        Commands::Logout => cli::commands::logout::handle(session),
        Commands::Whoami => cli::commands::whoami::handle(session),
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, cfg),
        Commands::Profile => cli::commands::profile::handle(cfg, session),
        Commands::Task { action } => cli::commands::task::handle(action, cfg, session),
        Commands::Asset { action } => cli::commands::asset::handle(action, cfg, session),
        Commands::Template { action } => cli::commands::template::handle(action, cfg, session),
        Commands::Role { action } => cli::commands::role::handle(action, cfg, session),
        Commands::User { action } => cli::commands::user::handle(action, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config ONCE
    let mut cfg = Config::load();

    // 3. apply command-line overrides
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        cfg.session_file = path.clone();
    }

    // 4. restore the session from durable storage before any command runs;
    //    a stale or undecodable token degrades to an anonymous session
    let mut session = Session::new(TokenStore::new(&cfg.session_file));
    session.restore();

    // 5. pass everything to the dispatcher
    dispatch(&cli, &cfg, &mut session)
}
