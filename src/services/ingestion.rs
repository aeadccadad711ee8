use std::path::Path;

use anyhow::Context;
use log::info;

use crate::database::{NewSeasonStats, Player, StatRepository};
use crate::domain::RosterFile;
use crate::errors::{EngineError, Result};
use crate::tiers::Position;

/// Loads real players and their season rows from a JSON roster file.
pub struct IngestionService {
    repository: StatRepository,
}

impl IngestionService {
    pub fn new(repository: StatRepository) -> Self {
        Self { repository }
    }

    pub fn run(&self, roster_path: &Path) -> Result<()> {
        info!("=== Starting Roster Import ===");

        let roster = self.load_roster(roster_path)?;
        info!("  → Loaded {} players from {}", roster.players.len(), roster_path.display());

        let (players, seasons) = self.import(roster)?;
        info!("  → Stored {players} players and {seasons} season rows");

        info!("=== Import Complete ===");
        Ok(())
    }

    fn load_roster(&self, path: &Path) -> Result<RosterFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))
            .map_err(EngineError::Roster)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse roster file {}", path.display()))
            .map_err(EngineError::Roster)
    }

    /// Writes the whole roster in one transaction and returns the number of
    /// players and season rows stored.
    pub fn import(&self, roster: RosterFile) -> Result<(usize, usize)> {
        let mut players = Vec::with_capacity(roster.players.len());
        let mut seasons = Vec::new();

        for entry in roster.players {
            seasons.extend(entry.seasons.into_iter().map(|season| NewSeasonStats {
                player_id: entry.player_id,
                season: season.season,
                ppg: season.ppg,
                apg: season.apg,
                rpg: season.rpg,
                stl: season.stl,
                blk: season.blk,
                plus_minus: season.plus_minus,
            }));
            players.push(Player {
                player_id: entry.player_id,
                name: entry.name,
                team: entry.team,
                position: Position::parse(&entry.position).to_string(),
            });
        }

        self.repository.import_roster(&players, &seasons)
    }
}
