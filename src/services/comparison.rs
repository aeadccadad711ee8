use log::debug;

use crate::database::StatRepository;
use crate::domain::{ComparedPlayer, ComparisonResult};
use crate::errors::{EngineError, Result};
use crate::tiers::classify_label;

pub const DEFAULT_CATEGORY: &str = "overall";

pub struct ComparisonService {
    repository: StatRepository,
}

impl ComparisonService {
    pub fn new(repository: StatRepository) -> Self {
        Self { repository }
    }

    /// Compares two (player, season) lines. Either side missing fails the whole
    /// call. `category` is echoed back and does not affect scoring.
    pub fn compare(
        &self,
        player1_id: i64,
        season1: &str,
        player2_id: i64,
        season2: &str,
        category: Option<&str>,
    ) -> Result<ComparisonResult> {
        let player1 = self.load_side(player1_id, season1)?;
        let player2 = self.load_side(player2_id, season2)?;

        Ok(ComparisonResult {
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            player1,
            player2,
        })
    }

    fn load_side(&self, player_id: i64, season: &str) -> Result<ComparedPlayer> {
        let not_found = || {
            debug!("No stats for player {player_id} in season {season}");
            EngineError::not_found(format!("player {player_id} in season {season}"))
        };

        let season_stats = self.repository.season_stats_for(player_id, season)?.ok_or_else(not_found)?;
        let player = self.repository.find_player(player_id)?.ok_or_else(not_found)?;

        Ok(ComparedPlayer {
            id: player.player_id,
            name: player.name,
            season: season_stats.season,
            stats: season_stats.stats,
            tiers: classify_label(&season_stats.stats, &player.position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{seed_player, seed_season, temp_repository};
    use crate::tiers::{StatLine, Tier};

    fn seeded_service() -> (tempfile::TempDir, ComparisonService) {
        let (dir, repo) = temp_repository();
        seed_player(&repo, 1, "Floor General", "PG");
        seed_player(&repo, 2, "Rim Protector", "C");
        seed_season(&repo, 1, "2015-16", StatLine::new(30.1, 6.7, 5.4, 2.1, 0.2));
        seed_season(&repo, 1, "2012-13", StatLine::new(22.9, 6.9, 4.0, 1.6, 0.2));
        seed_season(&repo, 2, "2019-20", StatLine::new(15.0, 2.0, 13.5, 0.8, 2.9));
        (dir, ComparisonService::new(repo))
    }

    #[test]
    fn test_compare_packages_both_sides() {
        let (_dir, service) = seeded_service();

        let result = service.compare(1, "2015-16", 2, "2019-20", None).unwrap();

        assert_eq!(result.category, "overall");
        assert_eq!(result.player1.name, "Floor General");
        assert_eq!(result.player1.season, "2015-16");
        assert_eq!(result.player1.tiers.overall_tier, Tier::Superstar);
        assert_eq!(result.player2.id, 2);
        assert_eq!(result.player2.stats.rpg, 13.5);
    }

    #[test]
    fn test_compare_is_symmetric() {
        let (_dir, service) = seeded_service();

        let forward = service.compare(1, "2012-13", 2, "2019-20", Some("defense")).unwrap();
        let swapped = service.compare(2, "2019-20", 1, "2012-13", Some("defense")).unwrap();

        assert_eq!(forward.player1, swapped.player2);
        assert_eq!(forward.player2, swapped.player1);
        assert_eq!(forward.category, swapped.category);
    }

    #[test]
    fn test_same_player_across_seasons() {
        let (_dir, service) = seeded_service();

        let result = service.compare(1, "2015-16", 1, "2012-13", None).unwrap();
        assert_eq!(result.player1.name, result.player2.name);
        assert_ne!(result.player1.stats, result.player2.stats);
    }

    #[test]
    fn test_missing_season_fails_whole_comparison() {
        let (_dir, service) = seeded_service();

        assert!(service.compare(1, "2015-16", 2, "1999-00", None).unwrap_err().is_not_found());
        assert!(service.compare(99, "2015-16", 2, "2019-20", None).unwrap_err().is_not_found());
    }
}
