use log::{debug, warn};

use super::connection::{get_connection, DbPool};
use super::models::{
    HypotheticalPlayer, HypotheticalRecord, NewHypothetical, NewSeasonStats, Player, SeasonStats,
};
use super::{hypotheticals, players, setup, stats};
use crate::config::DatabaseSettings;
use crate::errors::{EngineError, Result};
use crate::tiers::StatLine;

/// Typed access to stored statistics. Every method checks out its own pooled
/// connection and releases it before returning.
#[derive(Clone)]
pub struct StatRepository {
    pool: DbPool,
}

impl StatRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = super::create_pool(settings)?;
        Ok(Self::new(pool))
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        setup::initialize_schema(&conn)?;
        Ok(())
    }

    pub fn reset_hypotheticals(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        setup::reset_hypotheticals(&conn)?;
        Ok(())
    }

    pub fn ping(&self) -> Result<()> {
        let conn = get_connection(&self.pool)?;
        conn.query_row("SELECT 1 FROM Players LIMIT 1", [], |_| Ok(()))
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(()),
                other => Err(other),
            })
            .map_err(|e| anyhow::Error::new(e).context("Health probe query failed"))?;
        Ok(())
    }

    pub fn find_player(&self, player_id: i64) -> Result<Option<Player>> {
        let conn = get_connection(&self.pool)?;
        Ok(players::find_by_id(&conn, player_id)?)
    }

    /// One page of players ordered by id, plus the total player count.
    pub fn list_players(&self, limit: usize, offset: usize) -> Result<(Vec<Player>, usize)> {
        let conn = get_connection(&self.pool)?;
        let rows = players::list_page(&conn, limit, offset)?;
        let total = players::count_all(&conn)?;
        Ok((rows, total))
    }

    pub fn average_season_stats(&self, player_id: i64) -> Result<Option<StatLine>> {
        let conn = get_connection(&self.pool)?;
        Ok(stats::average_for_player(&conn, player_id)?)
    }

    pub fn season_stats_for(&self, player_id: i64, season: &str) -> Result<Option<SeasonStats>> {
        let conn = get_connection(&self.pool)?;
        Ok(stats::find_for_season(&conn, player_id, season)?)
    }

    /// Season rows sorted by season label, descending.
    pub fn list_season_stats(&self, player_id: i64) -> Result<Vec<SeasonStats>> {
        let conn = get_connection(&self.pool)?;
        Ok(stats::list_by_player(&conn, player_id)?)
    }

    /// Upserts players and their season rows in one transaction. A season row
    /// naming a player that is neither in `roster` nor already stored aborts
    /// the whole import.
    pub fn import_roster(&self, roster: &[Player], seasons: &[NewSeasonStats]) -> Result<(usize, usize)> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().map_err(anyhow::Error::new)?;

        for player in roster {
            players::upsert_player(&tx, player)?;
        }
        for season in seasons {
            if players::find_by_id(&tx, season.player_id)?.is_none() {
                return Err(EngineError::invalid_reference(format!(
                    "season {} references unknown player {}",
                    season.season, season.player_id
                )));
            }
            stats::upsert_season(&tx, season)?;
        }

        tx.commit().map_err(anyhow::Error::new)?;
        Ok((roster.len(), seasons.len()))
    }

    /// Inserts the player row and its stats row atomically.
    pub fn create_hypothetical(&self, player: &NewHypothetical, line: &StatLine) -> Result<HypotheticalPlayer> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().map_err(anyhow::Error::new)?;

        let created = hypotheticals::insert_player(&tx, player)?;
        hypotheticals::insert_stats(&tx, created.id, line)?;

        tx.commit().map_err(anyhow::Error::new)?;
        Ok(created)
    }

    pub fn find_hypothetical(&self, id: i64) -> Result<Option<HypotheticalRecord>> {
        let conn = get_connection(&self.pool)?;
        let record = hypotheticals::find_record(&conn, id)?;

        if record.is_none() && hypotheticals::find_player(&conn, id)?.is_some() {
            warn!("Hypothetical player {id} exists without a stats row");
        }
        Ok(record)
    }

    pub fn list_hypotheticals(&self) -> Result<Vec<HypotheticalRecord>> {
        let conn = get_connection(&self.pool)?;
        Ok(hypotheticals::list_records(&conn)?)
    }

    /// Overwrites both rows of an existing hypothetical player. Nothing is
    /// written unless both rows exist; missing rows are never created.
    pub fn update_hypothetical(&self, id: i64, player: &NewHypothetical, line: &StatLine) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().map_err(anyhow::Error::new)?;

        if hypotheticals::update_player(&tx, id, player)? == 0 {
            debug!("Update skipped, hypothetical player {id} does not exist");
            return Err(EngineError::not_found(format!("hypothetical player {id}")));
        }
        if hypotheticals::update_stats(&tx, id, line)? == 0 {
            warn!("Hypothetical player {id} has no stats row, update rolled back");
            return Err(EngineError::not_found(format!("stats for hypothetical player {id}")));
        }

        tx.commit().map_err(anyhow::Error::new)?;
        Ok(())
    }

    pub fn delete_hypothetical(&self, id: i64) -> Result<()> {
        let conn = get_connection(&self.pool)?;

        if hypotheticals::delete_player(&conn, id)? == 0 {
            return Err(EngineError::not_found(format!("hypothetical player {id}")));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> super::DbConn {
        get_connection(&self.pool).unwrap()
    }
}
