use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "NBA player tiering engine")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or nba_project.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the database tables
    Init {
        /// Drop every hypothetical player before recreating the tables
        #[arg(long)]
        reset_hypotheticals: bool,
    },
    /// Load players and season stats from a JSON roster file
    Import {
        file: PathBuf,
    },
    /// List players page by page
    Players {
        #[arg(long)]
        page: Option<usize>,
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Show a player with career averages and tiers
    Player {
        id: i64,
    },
    /// Show a player's season-by-season stats
    Stats {
        id: i64,
    },
    /// Compare two players for two seasons
    Compare {
        #[arg(long)]
        player1: i64,
        #[arg(long)]
        season1: String,
        #[arg(long)]
        player2: i64,
        #[arg(long)]
        season2: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Manage hypothetical players
    Hypothetical {
        #[clap(subcommand)]
        action: HypotheticalAction,
    },
    /// Check that the database is reachable
    Health,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum HypotheticalAction {
    /// Create a player from a JSON payload
    Add {
        /// e.g. '{"name": "X", "team": "Y", "position": "PG", "PPG": 20, ...}'
        payload: String,
    },
    /// List every hypothetical player with tiers
    List,
    /// Overwrite a player from a JSON payload
    Update {
        id: i64,
        payload: String,
    },
    /// Delete a player and its stats
    Delete {
        id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compare() {
        let cli = Cli::parse_from([
            "nba-tiering", "compare", "--player1", "1", "--season1", "2015-16", "--player2", "2",
            "--season2", "2019-20",
        ]);

        assert_eq!(
            cli.command,
            Command::Compare {
                player1: 1,
                season1: "2015-16".to_string(),
                player2: 2,
                season2: "2019-20".to_string(),
                category: None,
            }
        );
    }

    #[test]
    fn test_parse_global_database_flag() {
        let cli = Cli::parse_from(["nba-tiering", "hypothetical", "delete", "3", "--database", "x.db"]);

        assert_eq!(cli.database.as_deref(), Some("x.db"));
        assert_eq!(
            cli.command,
            Command::Hypothetical { action: HypotheticalAction::Delete { id: 3 } }
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
