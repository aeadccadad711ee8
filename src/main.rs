use anyhow::{bail, Result};
use colored::Colorize;

use nba_tiering::cli::{Cli, Command};
use nba_tiering::config::AppConfig;
use nba_tiering::{
    build_config, handle_compare, handle_completions, handle_health, handle_hypothetical, handle_import,
    handle_init, handle_player, handle_players, handle_stats, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = build_config(cli.database.as_deref());
    execute_command(&config, &cli.command)
}

fn execute_command(config: &AppConfig, command: &Command) -> Result<()> {
    match command {
        Command::Init { reset_hypotheticals } => handle_init(config, *reset_hypotheticals),
        Command::Import { file } => handle_import(config, file),
        Command::Players { page, per_page } => handle_players(config, *page, *per_page),
        Command::Player { id } => handle_player(config, *id),
        Command::Stats { id } => handle_stats(config, *id),
        Command::Compare { player1, season1, player2, season2, category } => handle_compare(
            config,
            (*player1, season1.as_str()),
            (*player2, season2.as_str()),
            category.as_deref(),
        ),
        Command::Hypothetical { action } => handle_hypothetical(config, action),
        Command::Health => {
            if !handle_health(config)? {
                bail!("database is unhealthy");
            }
            Ok(())
        }
        Command::Completions { shell } => {
            handle_completions(*shell);
            Ok(())
        }
    }
}
