pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod services;
pub mod tiers;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{Cli, HypotheticalAction};
use crate::config::settings::AppConfig;
use crate::database::StatRepository;
use crate::domain::HypotheticalInput;
use crate::services::{ComparisonService, HypotheticalPlayerService, IngestionService, PlayerService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(database: Option<&str>) -> AppConfig {
    match database {
        Some(path) => AppConfig::new().with_database_path(path),
        None => AppConfig::new(),
    }
}

fn open_repository(config: &AppConfig) -> Result<StatRepository> {
    let repository = StatRepository::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.path))?;
    Ok(repository)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn handle_init(config: &AppConfig, reset_hypotheticals: bool) -> Result<()> {
    let repository = open_repository(config)?;
    if reset_hypotheticals {
        repository.reset_hypotheticals()?;
    } else {
        repository.initialize()?;
    }
    Ok(())
}

pub fn handle_import(config: &AppConfig, file: &Path) -> Result<()> {
    let service = IngestionService::new(open_repository(config)?);
    service.run(file)?;
    Ok(())
}

pub fn handle_players(config: &AppConfig, page: Option<usize>, per_page: Option<usize>) -> Result<()> {
    let service = PlayerService::new(open_repository(config)?, config.pagination.clone());
    print_json(&service.list_players(page, per_page)?)
}

pub fn handle_player(config: &AppConfig, player_id: i64) -> Result<()> {
    let service = PlayerService::new(open_repository(config)?, config.pagination.clone());
    print_json(&service.player_profile(player_id)?)
}

pub fn handle_stats(config: &AppConfig, player_id: i64) -> Result<()> {
    let service = PlayerService::new(open_repository(config)?, config.pagination.clone());
    print_json(&service.season_history(player_id)?)
}

pub fn handle_compare(
    config: &AppConfig,
    (player1, season1): (i64, &str),
    (player2, season2): (i64, &str),
    category: Option<&str>,
) -> Result<()> {
    let service = ComparisonService::new(open_repository(config)?);
    print_json(&service.compare(player1, season1, player2, season2, category)?)
}

pub fn handle_hypothetical(config: &AppConfig, action: &HypotheticalAction) -> Result<()> {
    let service = HypotheticalPlayerService::new(open_repository(config)?);

    match action {
        HypotheticalAction::Add { payload } => print_json(&service.create(parse_payload(payload)?)?),
        HypotheticalAction::List => print_json(&service.list()?),
        HypotheticalAction::Update { id, payload } => {
            print_json(&service.update(*id, parse_payload(payload)?)?)
        }
        HypotheticalAction::Delete { id } => {
            service.delete(*id)?;
            print_json(&serde_json::json!({ "message": format!("Hypothetical player {id} deleted.") }))
        }
    }
}

fn parse_payload(payload: &str) -> Result<HypotheticalInput> {
    serde_json::from_str(payload).context("Invalid hypothetical payload")
}

pub fn handle_health(config: &AppConfig) -> Result<bool> {
    let service = PlayerService::new(open_repository(config)?, config.pagination.clone());
    let report = service.health();
    print_json(&report)?;
    Ok(report.is_healthy())
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_reports_invalid_payload() {
        let err = parse_payload(r#"{"name": 5}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid hypothetical payload"));
    }

    #[test]
    fn test_parse_payload_accepts_object() {
        let input = parse_payload(r#"{"name": "X", "PPG": 10}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("X"));
    }
}
