use log::{debug, error};

use crate::config::PaginationSettings;
use crate::database::{SeasonStats, StatRepository};
use crate::domain::{HealthReport, PlayerPage, PlayerProfile};
use crate::errors::{EngineError, Result};
use crate::pagination::PageRequest;
use crate::tiers::classify_label;

/// Read-side operations over real players.
pub struct PlayerService {
    repository: StatRepository,
    pagination: PaginationSettings,
}

impl PlayerService {
    pub fn new(repository: StatRepository, pagination: PaginationSettings) -> Self {
        Self { repository, pagination }
    }

    pub fn list_players(&self, page: Option<usize>, per_page: Option<usize>) -> Result<PlayerPage> {
        let request = PageRequest::resolve(page, per_page, &self.pagination);
        let (data, total) = self.repository.list_players(request.per_page, request.offset())?;

        Ok(PlayerPage {
            data,
            meta: request.meta(total),
        })
    }

    /// Player identity with career-average stats and the tiers they earn.
    /// A player without season rows is scored on all-zero stats.
    pub fn player_profile(&self, player_id: i64) -> Result<PlayerProfile> {
        ensure_valid_id(player_id)?;

        let player = self
            .repository
            .find_player(player_id)?
            .ok_or_else(|| EngineError::not_found(format!("player {player_id}")))?;
        let averages = self.repository.average_season_stats(player_id)?;
        if averages.is_none() {
            debug!("Player {player_id} has no season stats");
        }
        let tiers = classify_label(&averages.unwrap_or_default(), &player.position);

        Ok(PlayerProfile { player, averages, tiers })
    }

    pub fn season_history(&self, player_id: i64) -> Result<Vec<SeasonStats>> {
        ensure_valid_id(player_id)?;

        let seasons = self.repository.list_season_stats(player_id)?;
        if seasons.is_empty() {
            return Err(EngineError::not_found(format!("stats for player {player_id}")));
        }
        Ok(seasons)
    }

    pub fn health(&self) -> HealthReport {
        match self.repository.ping() {
            Ok(()) => HealthReport { status: "healthy", error: None },
            Err(e) => {
                let detail = format!("{:#}", anyhow::Error::new(e));
                error!("Health check failed: {detail}");
                HealthReport { status: "unhealthy", error: Some(detail) }
            }
        }
    }
}

fn ensure_valid_id(player_id: i64) -> Result<()> {
    if player_id <= 0 {
        return Err(EngineError::invalid_reference(format!("player id {player_id}")));
    }
    Ok(())
}
